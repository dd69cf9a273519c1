//! Tests scientifiques (campagne) : propriétés de la série + collaborateur de mode.
//!
//! Notes importantes :
//! - 5 termes à 1.8 rad donnent 0.973863 (et non sin(1.8) = 0.973848) :
//!   l’écart ~1.6e-5 est celui de la série tronquée, pas un bug.
//! - La décroissance de l’erreur est vérifiée pour 1..5 termes à 1.8 rad,
//!   bien avant la limite de précision f64.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::mode::{Configuration, Mode};
use super::serie::{
    approx_sinus, approx_sinus_demarche, factorielle, puissance, signe, ANGLE_REFERENCE,
    TERMES_REFERENCE,
};

/* ------------------------ Série ------------------------ */

#[test]
fn sci_angle_nul() {
    for termes in 1..=10 {
        assert_eq!(approx_sinus(0.0_f64, termes), Ok(0.0), "termes={termes}");
    }
}

#[test]
fn sci_un_terme_rend_l_angle() {
    for x in [-2.5_f64, -0.1, 0.3, 1.8, 7.0] {
        assert_eq!(approx_sinus(x, 1), Ok(x), "x={x}");
    }
}

#[test]
fn sci_invocation_reference() {
    let v = approx_sinus(ANGLE_REFERENCE, TERMES_REFERENCE).unwrap();
    assert_eq!(format!("{v:.6}"), "0.973863");
    assert_abs_diff_eq!(v, 0.973_863_402_171_428_5, epsilon = 1e-12);
    assert_abs_diff_eq!(v, ANGLE_REFERENCE.sin(), epsilon = 2e-5);
}

#[test]
fn sci_erreur_decroissante_1_a_5() {
    let vrai = ANGLE_REFERENCE.sin();
    let erreurs: Vec<f64> = (1..=5)
        .map(|k| (approx_sinus(ANGLE_REFERENCE, k).unwrap() - vrai).abs())
        .collect();

    for w in erreurs.windows(2) {
        assert!(w[1] < w[0], "erreurs={erreurs:?}");
    }
}

#[test]
fn sci_convergence_vers_sin() {
    for x in [-1.0_f64, 0.25, 0.5, 1.0, 1.8] {
        let v = approx_sinus(x, 12).unwrap();
        assert_relative_eq!(v, x.sin(), max_relative = 1e-12);
    }
}

#[test]
fn sci_imparite() {
    // sin(-x) = -sin(x) terme à terme (exposants impairs)
    for x in [0.2_f64, 1.1, 1.8, 3.0] {
        for termes in 1..=8 {
            let a = approx_sinus(x, termes).unwrap();
            let b = approx_sinus(-x, termes).unwrap();
            assert_eq!(a, -b, "x={x} termes={termes}");
        }
    }
}

#[test]
fn sci_pas_de_reduction_d_angle() {
    // 5 termes ne suffisent pas loin de 0 : limite connue, pas une erreur
    let x = 10.0_f64;
    let v = approx_sinus(x, 5).unwrap();
    assert!((v - x.sin()).abs() > 1.0);
}

#[test]
fn sci_somme_partielle_invariant() {
    let d = approx_sinus_demarche(ANGLE_REFERENCE, 6).unwrap();
    let mut somme = 0.0_f64;
    for t in &d {
        let attendu = signe::<f64>(t.n) * puissance(ANGLE_REFERENCE, i64::from(2 * t.n + 1)).unwrap()
            / factorielle(i64::from(2 * t.n + 1)).unwrap() as f64;
        assert_eq!(t.terme, attendu);
        somme += attendu;
        assert_eq!(t.somme, somme);
    }
}

/* ------------------------ Aides ------------------------ */

#[test]
fn sci_factorielles_connues() {
    assert_eq!(factorielle(0), Ok(1));
    assert_eq!(factorielle(1), Ok(1));
    assert_eq!(factorielle(5), Ok(120));
    // récurrence n! = n·(n-1)!
    for n in 1..=30 {
        assert_eq!(
            factorielle(n).unwrap(),
            n as u128 * factorielle(n - 1).unwrap()
        );
    }
}

#[test]
fn sci_puissances() {
    assert_eq!(puissance(0.0_f64, 0), Ok(1.0));
    assert_eq!(puissance(-1.0_f64, 0), Ok(1.0));
    assert_eq!(puissance(-1.0_f64, 1), Ok(-1.0));
    assert_eq!(puissance(-1.0_f64, 2), Ok(1.0));
    assert_eq!(puissance(-1.0_f64, 3), Ok(-1.0));
}

/* ------------------------ Mode ------------------------ */

#[test]
fn sci_mode_2c_65_refuse() {
    let mut c = Configuration::default();
    let avant = c;
    assert!(c.set_mode(Mode::DeuxComplement, 65).is_err());
    assert_eq!(c, avant);
}

#[test]
fn sci_mode_u_32_applique() {
    let mut c = Configuration::default();
    assert!(c.set_mode(Mode::NonSigne, 32).is_ok());
    assert_eq!((c.mode(), c.taille_mot()), (Mode::NonSigne, 32));
}
