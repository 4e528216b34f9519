mod context;
mod init;
mod mutate;
mod query;
mod serve;

pub use context::CommandContext;
pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;
