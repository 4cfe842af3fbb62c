use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Named pages map to fixed files; everything else falls through to the
/// static directory (assets, images).
const PAGES: [(&str, &str); 4] = [
    ("/", "index.html"),
    ("/impressum", "impressum.html"),
    ("/impressum-en", "impressum-en.html"),
    ("/favicon.ico", "favicon.ico"),
];

pub fn static_routes<S>(static_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = PAGES.iter().fold(Router::new(), |router, (route, file)| {
        router.route_service(route, ServeFile::new(static_dir.join(file)))
    });

    router.fallback_service(ServeDir::new(static_dir))
}
