pub mod function;
pub mod type_decl;

pub use function::FuncDecl;
pub use type_decl::TypeDecl;
