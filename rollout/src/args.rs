use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the melonDS executable.
    #[arg(long)]
    pub melonds_exe: PathBuf,
    /// ROM handed to the emulator on launch.
    #[arg(long)]
    pub rom: Option<PathBuf>,
    /// Keymap document mapping logical buttons to physical keys.
    #[arg(long, default_value = "configs/keymap_x11.json")]
    pub keymap: PathBuf,
    /// Reward configuration; omit to run on built-in defaults.
    #[arg(long)]
    pub rewards_config: Option<PathBuf>,
    #[arg(long, default_value_t = 50)]
    pub episodes: u32,
    #[arg(long, default_value_t = 500)]
    pub max_steps: u32,
    #[arg(long, default_value_t = 4)]
    pub frame_skip: u32,
    #[arg(long, default_value_t = 4)]
    pub stack_frames: usize,
}
