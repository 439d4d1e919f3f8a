//! API and media base URL resolution.
//!
//! The client is normally served by the backend itself, so bases derive
//! from the window origin. During development the UI dev server runs on
//! its own port and requests are redirected to the backend port.

/// Backend port used when the origin is the UI dev server.
const BACKEND_PORT: &str = "8080";
/// UI dev-server ports mapped onto the backend.
const DEV_PORTS: [&str; 2] = ["5173", "3000"];

/// Fallback API base when the origin cannot be resolved.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
/// Fallback media base when the origin cannot be resolved.
pub const DEFAULT_MEDIA_BASE: &str = "http://localhost:8080/media";

/// Build the service origin from location parts, mapping dev-server
/// ports to the backend port.
#[must_use]
pub fn origin_for(protocol: &str, hostname: &str, port: &str) -> String {
    let mapped = if DEV_PORTS.contains(&port) {
        BACKEND_PORT
    } else {
        port
    };
    let mut origin = format!("{protocol}//{hostname}");
    if !mapped.is_empty() {
        origin.push(':');
        origin.push_str(mapped);
    }
    origin
}

/// API base under `origin`.
#[must_use]
pub fn api_base_for(origin: &str) -> String {
    format!("{}/api", origin.trim_end_matches('/'))
}

/// Media base under `origin`.
#[must_use]
pub fn media_base_for(origin: &str) -> String {
    format!("{}/media", origin.trim_end_matches('/'))
}

/// Resolve the API base from the window location.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn api_base_url() -> String {
    window_origin().map_or_else(|| DEFAULT_API_BASE.to_string(), |o| api_base_for(&o))
}

/// Resolve the media base from the window location.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn media_base_url() -> String {
    window_origin().map_or_else(|| DEFAULT_MEDIA_BASE.to_string(), |o| media_base_for(&o))
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    let location = gloo::utils::window().location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    let port = location.port().unwrap_or_default();
    Some(origin_for(&protocol, &hostname, &port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_port_maps_to_backend() {
        assert_eq!(
            origin_for("http:", "localhost", "5173"),
            "http://localhost:8080"
        );
        assert_eq!(
            origin_for("http:", "localhost", "3000"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn production_origin_is_kept() {
        assert_eq!(
            origin_for("https:", "protube.example", ""),
            "https://protube.example"
        );
        assert_eq!(
            origin_for("https:", "protube.example", "8443"),
            "https://protube.example:8443"
        );
    }

    #[test]
    fn bases_append_their_path() {
        assert_eq!(
            api_base_for("http://localhost:8080"),
            "http://localhost:8080/api"
        );
        assert_eq!(
            media_base_for("http://localhost:8080/"),
            "http://localhost:8080/media"
        );
    }
}
