//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO, reused as the full-replace
//!   update body
//!
//! JSON property names are PascalCase (`Id`, `Nome`, ...) to match the
//! column names; request bodies also accept the camelCase spelling.

pub mod inscricao;
pub mod lead;
pub mod oferta;
pub mod processo_seletivo;
