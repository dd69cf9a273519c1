//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - on accepte les erreurs attendues (termes hors bornes, angle mal formé)
//! - invariant clé : flottant et exact racontent la même somme

use std::time::{Duration, Instant};

use num_traits::ToPrimitive;

use super::angle::lire_angle;
use super::erreur::ErreurNoyau;
use super::eval::calcule_sinus;
use super::exact::approx_sinus_exacte;
use super::mode::{Base, Configuration, Mode, TAILLE_MOT_MAX};
use super::serie::TERMES_MAX;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’angles (bornée) ------------------------ */

fn gen_angle(rng: &mut Rng) -> String {
    let entier = rng.pick(4);
    let frac = rng.pick(1000);
    let signe = if rng.coin() { "-" } else { "" };
    format!("{signe}{entier}.{frac:03}")
}

fn gen_angle_bruite(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => String::new(),
        1 => "1..8".into(),
        2 if rng.coin() => format!("0.{}", "7".repeat(3000)),
        2 => "abc".into(),
        3 => format!(" {} ", gen_angle(rng)),
        _ => gen_angle(rng),
    }
}

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::EntreeVide
            | ErreurNoyau::AngleInvalide(_)
            | ErreurNoyau::AngleTropLong { .. }
            | ErreurNoyau::TermesNuls
            | ErreurNoyau::TropDeTermes { .. }
    )
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_pipeline_flottant_vs_exact() {
    let t0 = Instant::now();
    // budget dimensionné pour `cargo test` en debug (BigRational lent sans optimisations)
    let max = Duration::from_millis(8000);
    let mut rng = Rng::new(0x5EED_1801);

    for _ in 0..100 {
        let angle = gen_angle(&mut rng);
        let termes = 1 + rng.pick(TERMES_MAX);

        let r = calcule_sinus(&angle, termes, 12)
            .unwrap_or_else(|e| panic!("angle={angle:?} termes={termes} err={e}"));

        // la somme exacte, relue en f64, colle à la somme flottante
        let exact = approx_sinus_exacte(&lire_angle(&angle).unwrap(), termes).unwrap();
        let exact_f = exact.to_f64().unwrap();
        let tol = 1e-9 * (1.0 + exact_f.abs());
        assert!(
            (r.valeur - exact_f).abs() <= tol,
            "angle={angle} termes={termes} flottant={} exact={exact_f}",
            r.valeur
        );

        // ligne "%f" : toujours six décimales
        let dec = r.ligne.split('.').nth(1).unwrap_or("");
        assert_eq!(dec.len(), 6, "ligne={}", r.ligne);

        budget(t0, max);
    }
}

#[test]
fn fuzz_entrees_bruitees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(5000);
    let mut rng = Rng::new(42);

    for _ in 0..150 {
        let angle = gen_angle_bruite(&mut rng);
        let termes = rng.pick(TERMES_MAX + 4);

        match calcule_sinus(&angle, termes, 8) {
            Ok(r) => assert_eq!(r.demarche.termes.len(), termes as usize),
            Err(e) => assert!(is_erreur_attendue(&e), "angle={angle:?} err={e}"),
        }

        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme() {
    let mut rng = Rng::new(7);
    for _ in 0..50 {
        let angle = gen_angle(&mut rng);
        let termes = 1 + rng.pick(8);
        let a = calcule_sinus(&angle, termes, 15).unwrap();
        let b = calcule_sinus(&angle, termes, 15).unwrap();
        assert_eq!(a.valeur.to_bits(), b.valeur.to_bits());
        assert_eq!(a.exact, b.exact);
        assert_eq!(a.lecture, b.lecture);
    }
}

#[test]
fn fuzz_configuration() {
    let mut rng = Rng::new(0xC0FFEE);
    let mut c = Configuration::default();

    for _ in 0..500 {
        let avant = c;
        let mode = Mode::TOUS[rng.pick(3) as usize];
        let taille = rng.pick(130) as u8;

        match c.set_mode(mode, taille) {
            Ok(()) => {
                assert!(taille <= TAILLE_MOT_MAX);
                assert_eq!((c.mode(), c.taille_mot()), (mode, taille));
                assert_eq!(c.base(), avant.base());
            }
            Err(_) => {
                assert!(taille > TAILLE_MOT_MAX);
                assert_eq!(c, avant);
            }
        }

        if rng.pick(10) == 0 {
            c.set_base(Base::TOUTES[rng.pick(4) as usize]);
        }
    }
}
