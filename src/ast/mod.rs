/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kinds, the generic node view and tree printing
/// - expressions: Binary expressions, terms and operators
/// - statements: The program root and assignment statements
pub mod ast;
pub mod expressions;
pub mod statements;
