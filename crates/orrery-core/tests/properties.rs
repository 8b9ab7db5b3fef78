//! Property tests for the core catalog types.
use proptest::prelude::*;

use orrery_core::{Body, Catalog, CoreError, Tint};

proptest! {
    #[test]
    fn catalog_accepts_unique_positive_bodies(
        sizes in prop::collection::vec(0.001f64..1.0e15, 0..50),
    ) {
        let bodies: Vec<Body> = sizes
            .iter()
            .enumerate()
            .map(|(i, s)| Body::new(format!("Body {i}"), *s))
            .collect();
        let catalog = Catalog::new(bodies).unwrap();
        prop_assert_eq!(catalog.len(), sizes.len());
    }

    #[test]
    fn catalog_rejects_any_duplicate(
        n in 2usize..30,
        (a, b) in (0usize..30, 0usize..30),
    ) {
        let a = a % n;
        let b = b % n;
        prop_assume!(a != b);

        let mut bodies: Vec<Body> = (0..n).map(|i| Body::new(format!("Body {i}"), 1.0)).collect();
        bodies[b].name = bodies[a].name.clone();
        let result = Catalog::new(bodies);
        prop_assert!(matches!(result, Err(CoreError::DuplicateName(_))));
    }

    #[test]
    fn larger_than_is_strict(a in 0.001f64..1.0e9, b in 0.001f64..1.0e9) {
        let x = Body::new("X", a);
        let y = Body::new("Y", b);
        prop_assert!(!(x.is_larger_than(&y) && y.is_larger_than(&x)));
        prop_assert!(!x.is_larger_than(&x.clone()));
        prop_assert_eq!(x.is_larger_than(&y), a > b);
    }

    #[test]
    fn tint_channels_recombine(value in 0u32..=Tint::MAX) {
        let (r, g, b) = Tint(value).rgb();
        prop_assert_eq!((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b), value);
    }
}
