use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::clock::{Clock, SystemClock};
use crate::types::{Chain, ChainBuilder, Iter, Node};

use lib::utils::hash::{self, HashAlgorithm};
use lib::{DEFAULT_BODY_MAX, DEFAULT_BODY_MIN, DEFAULT_TIMESTAMP_FORMAT, Error, Result};

use log::trace;
use rand::Rng;
use rand::rngs::ThreadRng;

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let body: Vec<String> = self.body.iter().map(u32::to_string).collect();
        return write!(f, "Origin: {}\nBody: [{}]\nSignature: {}\n", self.origin, body.join(", "), self.signature);
    }
}

impl Node {
    pub fn next(&self) -> Option<&Node> {
        return self.next.as_deref();
    }

    pub fn is_tail(&self) -> bool {
        return self.next.is_none();
    }
}

impl Chain {
    pub fn new() -> Self {
        return Self { head: None, len: 0 };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.head.is_none();
    }

    pub fn head(&self) -> Option<&Node> {
        return self.head.as_deref();
    }

    pub fn tail(&self) -> Option<&Node> {
        return self.iter().last();
    }

    pub fn iter(&self) -> Iter<'_> {
        return Iter { cursor: self.head() };
    }

    /// Frees every node. Equivalent to letting the chain go out of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Chain {
    // Unlink node by node so long chains never recurse through `Box` destructors.
    fn drop(&mut self) {
        let mut cursor: Option<Box<Node>> = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node: &'a Node = self.cursor?;
        self.cursor = node.next.as_deref();
        return Some(node);
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl ChainBuilder<ThreadRng, SystemClock> {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        return Self::with_parts(rand::rng(), SystemClock, algorithm);
    }
}

impl Default for ChainBuilder<ThreadRng, SystemClock> {
    fn default() -> Self {
        return Self::new(HashAlgorithm::default());
    }
}

impl<R: Rng, C: Clock> ChainBuilder<R, C> {
    pub fn with_parts(rng: R, clock: C, algorithm: HashAlgorithm) -> Self {
        return Self { rng, clock, algorithm };
    }

    /// Builds `n` nodes carrying `k` random values each, node 0 first.
    ///
    /// Node 0 binds to the digest of the current timestamp; every later node binds to the
    /// signature of its predecessor. The clock is read at most once per build.
    pub fn build(&mut self, n: usize, k: usize) -> Chain {
        let mut chain: Chain = Chain::new();
        if n == 0 {
            return chain;
        }

        let mut head: Option<Box<Node>> = None;
        let mut tail: &mut Option<Box<Node>> = &mut head;
        let mut previous: Option<String> = None;

        for _ in 0..n {
            let body: Vec<u32> = self.draw_body(k);
            let origin: String = match previous.take() {
                Some(signature) => signature,
                None => self.seed_origin(),
            };
            let signature: String = sign(self.algorithm, &origin, &body);

            previous = Some(signature.clone());
            tail = &mut tail.insert(Box::new(Node { origin, body, signature, next: None })).next;
        }

        chain.head = head;
        chain.len = n;
        trace!("Built chain n={} k={} with {}", n, k, self.algorithm);
        return chain;
    }

    /// Like [`ChainBuilder::build`], but takes signed counts and rejects negative ones.
    pub fn build_checked(&mut self, n: i64, k: i64) -> Result<Chain> {
        let nodes: usize = usize::try_from(n).map_err(|_| Error::negative("n", n))?;
        let values: usize = usize::try_from(k).map_err(|_| Error::negative("k", k))?;
        return Ok(self.build(nodes, values));
    }

    /// Digest of the clock's current time rendered as `dd/MM/yyyy HH:mm:ss`.
    pub fn seed_origin(&self) -> String {
        let stamp: String = self.clock.now().format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        return hash::digest(self.algorithm, stamp.as_bytes());
    }

    fn draw_body(&mut self, k: usize) -> Vec<u32> {
        return (0..k).map(|_| self.rng.random_range(DEFAULT_BODY_MIN..=DEFAULT_BODY_MAX)).collect();
    }
}

/// Body values in decimal, separated by single spaces.
pub fn body_text(body: &[u32]) -> String {
    let values: Vec<String> = body.iter().map(u32::to_string).collect();
    return values.join(" ");
}

/// Signature of a node: digest of `origin`, a space, then the body text.
pub fn sign(algorithm: HashAlgorithm, origin: &str, body: &[u32]) -> String {
    let text: String = body_text(body);
    return hash::digest_parts(algorithm, &[origin.as_bytes(), b" ", text.as_bytes()]);
}
