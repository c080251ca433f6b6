mod repository;
mod reservations;

use mongodb::{Client, Database};

pub use repository::{Document, Repository};
pub use reservations::ReservationRepository;

/// Connect to the store described by `config` and return the database handle.
///
/// The handle is cheap to clone and is shared by every repository built from
/// it. Its lifecycle belongs to the caller; repositories never close it.
pub async fn connect(config: &abi::DbConfig) -> Result<Database, abi::Error> {
    let client = Client::with_uri_str(config.url()).await?;
    Ok(client.database(&config.dbname))
}
