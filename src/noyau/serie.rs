// src/noyau/serie.rs
//
// Sinus par série de Taylor tronquée (calcul “à la main”)
// -------------------------------------------------------
// sin(x) = x^1/1! - x^3/3! + x^5/5! - x^7/7! + ...
// n-ième terme = (-1)^n * x^(2n+1) / (2n+1)!
//
// - Aucune réduction d’angle : la précision se dégrade quand |x| grandit.
// - Nombre de termes fixe (pas de contrôle de convergence).
// - Domaine d’entrée vérifié : factorielle(n<0) et exposant < 0 sont refusés.

use log::debug;
use num_traits::Float;

use super::erreur::ErreurNoyau;

/// Angle de l’invocation de référence (radians).
pub const ANGLE_REFERENCE: f64 = 1.8;

/// Nombre de termes de l’invocation de référence.
pub const TERMES_REFERENCE: u32 = 5;

/// Dernier n tel que n! tient dans un u128 (35! > u128::MAX).
const FACTORIELLE_MAX: i64 = 34;

/// Garde-fou : (2n+1)! doit tenir dans un u128 => 2(termes-1)+1 <= 34, soit 33! au plus.
pub const TERMES_MAX: u32 = ((FACTORIELLE_MAX as u32) - 1) / 2 + 1;

/// Un terme de la série, avec la somme partielle après ce terme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TermeSerie<T> {
    pub n: u32,
    pub exposant: u32,
    pub signe: T,
    pub puissance: T,
    pub factorielle: u128,
    pub terme: T,
    pub somme: T,
}

/// n! par produit décroissant.
///
/// - n < 0 : refusé (la boucle “tant que positif” rendrait 1 en silence)
/// - dépassement u128 : refusé
pub fn factorielle(n: i64) -> Result<u128, ErreurNoyau> {
    if n < 0 {
        return Err(ErreurNoyau::FactorielleNegative(n));
    }

    let mut acc: u128 = 1;
    let mut i = n;
    while i > 0 {
        acc = acc
            .checked_mul(i as u128)
            .ok_or(ErreurNoyau::DepassementFactorielle(n))?;
        i -= 1;
    }
    Ok(acc)
}

/// base^exposant par multiplications répétées (exposant >= 0).
///
/// puissance(x, 0) = 1 pour tout x, y compris 0.
pub fn puissance<T: Float>(base: T, exposant: i64) -> Result<T, ErreurNoyau> {
    if exposant < 0 {
        return Err(ErreurNoyau::ExposantNegatif(exposant));
    }

    let mut acc = T::one();
    for _ in 0..exposant {
        acc = acc * base;
    }
    Ok(acc)
}

/// (-1)^n
pub fn signe<T: Float>(n: u32) -> T {
    // exposant toujours >= 0 ici
    puissance(-T::one(), i64::from(n)).unwrap_or_else(|_| T::one())
}

fn verifie_termes(termes: u32) -> Result<(), ErreurNoyau> {
    if termes == 0 {
        return Err(ErreurNoyau::TermesNuls);
    }
    if termes > TERMES_MAX {
        return Err(ErreurNoyau::TropDeTermes {
            demandes: termes,
            max: TERMES_MAX,
        });
    }
    Ok(())
}

/// Démarche complète : un TermeSerie par terme, somme partielle incluse.
pub fn approx_sinus_demarche<T: Float>(
    angle: T,
    termes: u32,
) -> Result<Vec<TermeSerie<T>>, ErreurNoyau> {
    verifie_termes(termes)?;

    let mut out = Vec::with_capacity(termes as usize);
    let mut somme = T::zero();

    for n in 0..termes {
        let exposant = 2 * n + 1;
        let s = signe::<T>(n);
        let p = puissance(angle, i64::from(exposant))?;
        let f = factorielle(i64::from(exposant))?;

        // u128 -> T : toujours Some pour Float (au pire arrondi)
        let f_t = <T as num_traits::NumCast>::from(f).unwrap_or_else(T::infinity);
        let terme = s * p / f_t;
        somme = somme + terme;

        debug!(
            "terme n={n} : signe={:?} x^{exposant}={:?} {exposant}!={f} terme={:?} somme={:?}",
            s.to_f64(),
            p.to_f64(),
            terme.to_f64(),
            somme.to_f64()
        );

        out.push(TermeSerie {
            n,
            exposant,
            signe: s,
            puissance: p,
            factorielle: f,
            terme,
            somme,
        });
    }

    Ok(out)
}

/// Somme partielle des `termes` premiers termes (approximation de sin(angle)).
///
/// Sans démarche ; le pipeline (eval.rs) passe par approx_sinus_demarche.
#[cfg_attr(not(test), allow(dead_code))]
pub fn approx_sinus<T: Float>(angle: T, termes: u32) -> Result<T, ErreurNoyau> {
    let demarche = approx_sinus_demarche(angle, termes)?;
    Ok(demarche.last().map(|t| t.somme).unwrap_or_else(T::zero))
}
