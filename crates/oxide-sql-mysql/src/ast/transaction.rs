//! Transaction control and prepared statement AST types.

use super::{Expr, Identifier};

/// Characteristic of START TRANSACTION.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    WithConsistentSnapshot,
    ReadWrite,
    ReadOnly,
}

impl TransactionMode {
    /// Keyword sequence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithConsistentSnapshot => "WITH CONSISTENT SNAPSHOT",
            Self::ReadWrite => "READ WRITE",
            Self::ReadOnly => "READ ONLY",
        }
    }
}

/// Completion clause of COMMIT and ROLLBACK.
///
/// Each accepted combination of `AND [NO] CHAIN` and `[NO] RELEASE` is a
/// distinct variant. `AND CHAIN RELEASE` is contradictory and rejected by
/// the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionType {
    /// No clause.
    #[default]
    Default,
    /// `AND CHAIN`.
    Chain,
    /// `AND CHAIN NO RELEASE`.
    ChainNoRelease,
    /// `AND NO CHAIN`.
    NoChain,
    /// `AND NO CHAIN RELEASE`.
    NoChainRelease,
    /// `AND NO CHAIN NO RELEASE`.
    NoChainNoRelease,
    /// `RELEASE`.
    Release,
    /// `NO RELEASE`.
    NoRelease,
}

impl CompletionType {
    /// Keyword sequence; empty for [`CompletionType::Default`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Chain => "AND CHAIN",
            Self::ChainNoRelease => "AND CHAIN NO RELEASE",
            Self::NoChain => "AND NO CHAIN",
            Self::NoChainRelease => "AND NO CHAIN RELEASE",
            Self::NoChainNoRelease => "AND NO CHAIN NO RELEASE",
            Self::Release => "RELEASE",
            Self::NoRelease => "NO RELEASE",
        }
    }
}

/// COMMIT or ROLLBACK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    /// `WORK` noise word.
    pub work: bool,
    pub completion: CompletionType,
}

/// Statement text source of PREPARE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareSource {
    /// Literal statement text.
    Text(String),
    /// `@var` holding the text; the name after `@`.
    Variable(String),
}

/// `PREPARE name FROM source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepare {
    pub name: Identifier,
    pub source: PrepareSource,
}

/// `EXECUTE name [USING expr, ..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execute {
    pub name: Identifier,
    pub using: Vec<Expr>,
}

/// `{DEALLOCATE | DROP} PREPARE name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deallocate {
    /// Spelled with DROP.
    pub drop: bool,
    pub name: Identifier,
}
