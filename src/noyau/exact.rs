// src/noyau/exact.rs
//
// Série exacte (rationnels) — même somme que serie.rs, sans arrondi
// ------------------------------------------------------------------
// - factorielle en BigUint : pas de borne de dépassement
// - puissance rationnelle : même règle de domaine (exposant < 0 refusé)
// - somme partielle en BigRational : sert de référence pour la lecture décimale

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurNoyau;

pub fn factorielle_exacte(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
}

/// base^exposant exact (exponentiation rapide, exposant >= 0).
pub fn puissance_exacte(base: &BigRational, exposant: i64) -> Result<BigRational, ErreurNoyau> {
    if exposant < 0 {
        return Err(ErreurNoyau::ExposantNegatif(exposant));
    }

    let mut e = exposant as u64;
    let mut acc = BigRational::one();
    let mut b = base.clone();

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    Ok(acc)
}

/// Somme partielle exacte des `termes` premiers termes.
pub fn approx_sinus_exacte(angle: &BigRational, termes: u32) -> Result<BigRational, ErreurNoyau> {
    if termes == 0 {
        return Err(ErreurNoyau::TermesNuls);
    }

    let mut somme = BigRational::zero();
    for n in 0..termes {
        let exposant = 2 * n + 1;
        let p = puissance_exacte(angle, i64::from(exposant))?;
        let f = BigRational::from_integer(BigInt::from(factorielle_exacte(exposant)));
        let terme = p / f;

        if n % 2 == 0 {
            somme += terme;
        } else {
            somme -= terme;
        }
    }
    Ok(somme)
}
