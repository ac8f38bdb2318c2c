use crate::catalog::Catalog;

/// State shared by every request handler. The catalog is built once in
/// `main` before the server binds and is read-only from then on, so an
/// `Arc<AppState>` needs no further synchronization.
pub struct AppState {
    pub catalog: Catalog,
}
