//! Database driver factory.
//!
//! See the [`databases::driver::build`](crate::core::databases::driver::build)
//! function for more information.
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::json_file::JsonFile;
use super::{Builder, Database};

/// The database management system used by the service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, derive_more::Display)]
pub enum Driver {
    /// A flat file holding the task collection as one JSON array.
    JsonFile,
}

/// It builds a new database driver.
///
/// ```rust,no_run
/// use tor_rest::core::databases::driver::{self, Driver};
///
/// let db_path = "./storage/tor-rest/tasks.json".to_string();
/// let database = driver::build(&Driver::JsonFile, &db_path);
/// ```
///
/// # Errors
///
/// This function will return an error if the driver cannot be instantiated
/// from the `db_path`.
pub fn build(driver: &Driver, db_path: &str) -> Result<Box<dyn Database>, Error> {
    let database = match driver {
        Driver::JsonFile => Builder::<JsonFile>::build(db_path),
    }?;

    Ok(database)
}
