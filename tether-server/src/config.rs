use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::http::PANEL_FILE;

pub const DEFAULT_PORT: u16 = 10000;

/// Listen address and the directory `/panel` is served from.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
        }
    }
}

/// Directory holding the control panel, resolved from where the server is
/// installed rather than from the working directory.
///
/// Prefers the directory of the running executable when the panel sits next
/// to it. Otherwise falls back to the `static/` directory of this crate's
/// source tree, which only exists on the machine that built the binary.
pub fn default_static_dir() -> PathBuf {
    static_dir_for(std::env::current_exe().ok().as_deref())
}

fn bundled_static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn static_dir_for(exe: Option<&Path>) -> PathBuf {
    exe.and_then(Path::parent)
        .filter(|dir| dir.join(PANEL_FILE).is_file())
        .map(Path::to_path_buf)
        .unwrap_or_else(bundled_static_dir)
}
