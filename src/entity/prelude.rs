pub use crate::{
    error::*, ColumnDef, ColumnTrait, ColumnType, DateTime, EntityName, EntityTrait, EnumIter,
    Iterable, ModelTrait, Nullable, Row,
};
