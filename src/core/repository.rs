use crate::core::library::InventoryResult;

// Repository abstracts whole-document persistence: the complete entity
// sequence is read and written in one operation, preserving order.
pub trait Repository<Entity>: Sync + Send {
    // loads every persisted entity, in stored order
    fn load_all(&self) -> InventoryResult<Vec<Entity>>;

    // replaces the persisted document with the given entities
    fn save_all(&self, entities: &[Entity]) -> InventoryResult<()>;
}
