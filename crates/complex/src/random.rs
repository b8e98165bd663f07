//! rand impls to generate random values, for testing.

use rand::distr::{Distribution, StandardUniform};

use crate::Complex;

/// Both parts are sampled uniformly from `[-1, 1)`.
impl Distribution<Complex> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Complex
    where
        R: rand::Rng + ?Sized,
    {
        Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
    }
}

impl Complex {
    /// Identical to calling [`rand::random::<Complex>`]. Use [`Complex::random_from`] to
    /// generate a value from an existing [`rand::Rng`].
    pub fn random() -> Self {
        rand::random()
    }

    /// Identical to calling [`rand::Rng::random::<Complex>`] on an existing source of
    /// [`rand::Rng`].
    pub fn random_from<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        rng.random()
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;

    #[test]
    fn test_random_in_range() {
        let mut rng = rand::rng();

        for _ in 0..1000 {
            let c = Complex::random_from(&mut rng);
            assert!((-1.0..1.0).contains(&c.real()));
            assert!((-1.0..1.0).contains(&c.imaginary()));
        }

        assert!(Complex::random().magnitude() <= 2.0_f64.sqrt());
    }
}
