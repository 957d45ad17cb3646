//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Every mutation runs in its
//! own transaction, committed on success and rolled back when dropped on
//! error. Reads go straight to the pool.

pub mod inscricao_repo;
pub mod lead_repo;
pub mod oferta_repo;
pub mod processo_seletivo_repo;

pub use inscricao_repo::InscricaoRepo;
pub use lead_repo::LeadRepo;
pub use oferta_repo::OfertaRepo;
pub use processo_seletivo_repo::ProcessoSeletivoRepo;
