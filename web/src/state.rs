use storage::Database;
use storage::services::public_id::PublicIdCodec;

/// Shared handles every handler needs: the database and the codec that
/// translates between internal ids and public tokens.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub ids: PublicIdCodec,
}
