use x11rb::connection::Connection;
use x11rb::protocol::shm::ConnectionExt as _;
use x11rb::rust_connection::RustConnection;

/// System V shared-memory segment attached on both ends: mapped into this
/// process and registered with the X server.
pub struct XShmSeg {
    address: *mut core::ffi::c_void,
    x_seg: u32,
    len: usize,
}

impl XShmSeg {
    pub fn new(conn: &RustConnection, len: usize) -> Option<XShmSeg> {
        let shmid = unsafe { libc::shmget(libc::IPC_PRIVATE, len, libc::IPC_CREAT | 0o777) };
        if shmid == -1 {
            return None;
        }
        let address = unsafe { libc::shmat(shmid, std::ptr::null(), 0) };
        if address as isize == -1 {
            return None;
        }
        let x_seg = conn.generate_id().ok()?;
        conn.shm_attach(x_seg, shmid as u32, false).ok()?;
        conn.flush().ok()?;
        Some(XShmSeg {
            address,
            x_seg,
            len,
        })
    }
    pub fn address(&self) -> *mut core::ffi::c_void {
        self.address
    }
    pub fn xid(&self) -> u32 {
        self.x_seg
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn close(self, conn: &RustConnection) {
        let _ = conn.shm_detach(self.x_seg);
        let _ = conn.flush();
        unsafe { libc::shmdt(self.address) };
    }
}
