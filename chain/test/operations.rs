#[cfg(test)]
mod operations {
    use std::cell::Cell;

    use chain::clock::{Clock, FixedClock};
    use chain::core::{body_text, sign};
    use chain::types::{Chain, ChainBuilder, Node};

    use lib::utils::hash::{self, HashAlgorithm};
    use lib::{DEFAULT_BODY_MAX, DEFAULT_BODY_MIN, DEFAULT_DIGEST_HEX_LEN, Error};

    use chrono::{NaiveDate, NaiveDateTime};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_time() -> NaiveDateTime {
        return NaiveDate::from_ymd_opt(2025, 5, 3).and_then(|d| d.and_hms_opt(14, 7, 9)).unwrap();
    }

    fn seeded_builder(seed: u64, algorithm: HashAlgorithm) -> ChainBuilder<StdRng, FixedClock> {
        return ChainBuilder::with_parts(StdRng::seed_from_u64(seed), FixedClock(fixed_time()), algorithm);
    }

    fn joined(body: &[u32]) -> String {
        return body.iter().map(|v| v.to_string()).collect::<Vec<String>>().join(" ");
    }

    /// Fixed clock that counts how often it is read.
    struct CountingClock {
        reads: Cell<usize>,
        at: NaiveDateTime,
    }

    impl Clock for CountingClock {
        fn now(&self) -> NaiveDateTime {
            self.reads.set(self.reads.get() + 1);
            return self.at;
        }
    }

    #[test]
    fn test_chain_linkage() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(7, HashAlgorithm::Sha256);

        for (n, k) in [(1usize, 0usize), (2, 1), (3, 4), (10, 200), (200, 10)] {
            let chain: Chain = builder.build(n, k);
            let nodes: Vec<&Node> = chain.iter().collect();

            assert_eq!(nodes.len(), n, "Walking the chain must visit every node.");
            assert_eq!(chain.len(), n);
            for pair in nodes.windows(2) {
                assert_eq!(pair[1].origin, pair[0].signature, "Origin must equal the previous signature.");
            }
            assert!(nodes[n - 1].is_tail());
            chain.release();
        }
    }

    #[test]
    fn test_signature_recomputation() {
        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
            let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(11, algorithm);
            let chain: Chain = builder.build(25, 6);

            for node in &chain {
                let text: String = format!("{} {}", node.origin, joined(&node.body));
                assert_eq!(hash::digest(algorithm, text.as_bytes()), node.signature);
                assert_eq!(sign(algorithm, &node.origin, &node.body), node.signature);
                assert_eq!(node.signature.len(), DEFAULT_DIGEST_HEX_LEN);
                assert_eq!(node.origin.len(), DEFAULT_DIGEST_HEX_LEN);
            }
        }
    }

    #[test]
    fn test_body_bounds() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(42, HashAlgorithm::Sha256);
        let chain: Chain = builder.build(50, 400);

        for node in chain.iter() {
            assert_eq!(node.body.len(), 400);
            assert!(node.body.iter().all(|v| (DEFAULT_BODY_MIN..=DEFAULT_BODY_MAX).contains(v)), "Body value out of range.");
        }
    }

    #[test]
    fn test_empty_chain() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(1, HashAlgorithm::Sha256);

        for k in [0usize, 1, 500] {
            let chain: Chain = builder.build(0, k);
            assert!(chain.is_empty());
            assert!(chain.head().is_none());
            assert_eq!(chain.len(), 0);
            assert_eq!(chain.iter().count(), 0);
            // Releasing an empty chain is a no-op.
            chain.release();
        }
    }

    #[test]
    fn test_first_origin_is_timestamp_digest() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(3, HashAlgorithm::Sha256);
        let chain: Chain = builder.build(4, 2);
        let head: &Node = chain.head().expect("Chain must have a head.");

        assert_eq!(head.origin, hash::digest(HashAlgorithm::Sha256, b"03/05/2025 14:07:09"));
        assert_eq!(head.origin, builder.seed_origin());
    }

    #[test]
    fn test_literal_scenario_empty_bodies() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(5, HashAlgorithm::Sha256);
        let chain: Chain = builder.build(3, 0);
        let nodes: Vec<&Node> = chain.iter().collect();

        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|node| node.body.is_empty()));
        assert_eq!(nodes[0].origin, builder.seed_origin());
        assert_eq!(nodes[1].origin, nodes[0].signature);
        assert_eq!(nodes[2].origin, nodes[1].signature);
        // An empty body still contributes the separating space.
        let expected: String = hash::digest(HashAlgorithm::Sha256, format!("{} ", nodes[0].origin).as_bytes());
        assert_eq!(nodes[0].signature, expected);
        assert_ne!(nodes[0].signature, nodes[1].signature);
        assert_ne!(nodes[1].signature, nodes[2].signature);
        assert_ne!(nodes[0].signature, nodes[2].signature);
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let first: Chain = seeded_builder(99, HashAlgorithm::Sha256).build(8, 16);
        let second: Chain = seeded_builder(99, HashAlgorithm::Sha256).build(8, 16);

        let first_signatures: Vec<&str> = first.iter().map(|node| node.signature.as_str()).collect();
        let second_signatures: Vec<&str> = second.iter().map(|node| node.signature.as_str()).collect();
        assert_eq!(first_signatures, second_signatures);
    }

    #[test]
    fn test_build_checked_rejects_negative_counts() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(0, HashAlgorithm::Sha256);

        assert!(matches!(builder.build_checked(-1, 4), Err(Error::InvalidArgument { name: "n", value: -1, .. })));
        assert!(matches!(builder.build_checked(3, -2), Err(Error::InvalidArgument { name: "k", value: -2, .. })));

        let chain: Chain = builder.build_checked(3, 2).expect("Non-negative counts must build.");
        assert_eq!(chain.len(), 3);
        assert!(builder.build_checked(0, 0).expect("Empty chain must build.").is_empty());
    }

    #[test]
    fn test_long_chain_release() {
        // Deep chains must be released without exhausting the stack.
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(13, HashAlgorithm::Blake3);
        let chain: Chain = builder.build(200_000, 0);

        assert_eq!(chain.len(), 200_000);
        assert!(chain.tail().is_some_and(Node::is_tail));
        chain.release();
    }

    #[test]
    fn test_node_display() {
        let mut builder: ChainBuilder<StdRng, FixedClock> = seeded_builder(21, HashAlgorithm::Sha256);
        let chain: Chain = builder.build(1, 3);
        let head: &Node = chain.head().expect("Chain must have a head.");
        let rendered: String = head.to_string();

        assert!(rendered.starts_with(&format!("Origin: {}\n", head.origin)));
        assert!(rendered.contains(&format!("Body: [{}, {}, {}]", head.body[0], head.body[1], head.body[2])));
        assert!(rendered.ends_with(&format!("Signature: {}\n", head.signature)));
    }

    #[test]
    fn test_clock_read_once_per_non_empty_build() {
        let clock: CountingClock = CountingClock { reads: Cell::new(0), at: fixed_time() };
        let mut builder: ChainBuilder<StdRng, CountingClock> = ChainBuilder::with_parts(StdRng::seed_from_u64(17), clock, HashAlgorithm::Sha256);

        let empty: Chain = builder.build(0, 5);
        assert!(empty.is_empty());
        assert_eq!(builder.clock.reads.get(), 0, "An empty build must not read the clock.");

        let chain: Chain = builder.build(50, 3);
        assert_eq!(chain.len(), 50);
        assert_eq!(builder.clock.reads.get(), 1, "A build must read the clock exactly once.");

        let head: &Node = chain.head().expect("Chain must have a head.");
        assert_eq!(head.origin, hash::digest(HashAlgorithm::Sha256, b"03/05/2025 14:07:09"));
    }

    #[test]
    fn test_body_text() {
        assert_eq!(body_text(&[1, 2, 3]), "1 2 3");
        assert_eq!(body_text(&[100_000]), "100000");
        assert_eq!(body_text(&[]), "");

        let expected: String = hash::digest(HashAlgorithm::Sha256, b"ab 1 2 3");
        assert_eq!(sign(HashAlgorithm::Sha256, "ab", &[1, 2, 3]), expected);
        // k = 0 keeps the separating space.
        assert_eq!(sign(HashAlgorithm::Sha256, "ab", &[]), hash::digest(HashAlgorithm::Sha256, b"ab "));
    }
}
