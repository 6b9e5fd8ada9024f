/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression tree
/// - definitions: Prototypes and function definitions
pub mod ast;
pub mod definitions;
