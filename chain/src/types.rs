use lib::utils::hash::HashAlgorithm;

/// A chain element bound to its predecessor through `origin`.
#[derive(Debug)]
pub struct Node {
    pub origin: String,
    pub body: Vec<u32>,
    pub signature: String,
    pub(crate) next: Option<Box<Node>>,
}

/// Exclusively owned, singly linked run of nodes.
#[derive(Debug, Default)]
pub struct Chain {
    pub(crate) head: Option<Box<Node>>,
    pub(crate) len: usize,
}

/// Borrowing walk from the head of a chain.
pub struct Iter<'a> {
    pub(crate) cursor: Option<&'a Node>,
}

pub struct ChainBuilder<R, C> {
    pub rng: R,
    pub clock: C,
    pub algorithm: HashAlgorithm,
}
