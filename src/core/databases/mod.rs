//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait. There is a single
//! implementation of the trait (one driver):
//!
//! - [`JsonFile`](crate::core::databases::json_file::JsonFile)
//!
//! The persistent object is the whole task collection, stored as a single
//! JSON array:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "task_name": "Ubuntu ISO",
//!     "resource": "rutra",
//!     "tor_number": "abc123",
//!     "dir_dest": "movies",
//!     "done": false
//!   }
//! ]
//! ```
//!
//! Every mutation rewrites the entire array (snapshot persistence). There are
//! no incremental writes and no transactional guarantee against a crash
//! mid-write.
pub mod driver;
pub mod error;
pub mod json_file;

use std::marker::PhantomData;

use self::error::Error;
use crate::core::tasks::Task;

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// It builds a boxed database driver.
    ///
    /// # Errors
    ///
    /// Will return `Error` if the driver cannot be instantiated from the
    /// `db_path`.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the
/// database.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `Error` if the driver cannot be instantiated from the
    /// `db_path`.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    /// It loads the whole task collection from the database.
    ///
    /// A database that has never been written to yields an empty collection.
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to load.
    fn load_tasks(&self) -> Result<Vec<Task>, Error>;

    /// It saves the whole task collection into the database, replacing the
    /// previous snapshot.
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to save.
    fn save_tasks(&self, tasks: &[Task]) -> Result<(), Error>;
}
