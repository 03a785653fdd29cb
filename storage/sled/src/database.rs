use sled::Db;

/// Name of the tree holding signal slots
pub const SIGNALS_TREE: &str = "signals";

pub struct Database {
    pub db: Db,
    pub(crate) signals_tree: sled::Tree,
}

impl Database {
    pub fn open(db: Db) -> anyhow::Result<Self> {
        let signals_tree = db.open_tree(SIGNALS_TREE)?; // one entry per persist key
        Ok(Self { db, signals_tree })
    }

    /// Convenience method for tests - delegates to underlying sled db
    pub fn tree_names(&self) -> Vec<sled::IVec> { self.db.tree_names() }
}
