//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (angle, termes, résultats, erreur, démarche,
//! configuration de mode) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de série, pas de parsing).
//! - La Configuration vit ici : pas d’état global.

use crate::noyau::mode::MEMOIRE_PROGRAMME;
use crate::noyau::{Configuration, CHIFFRES_DEFAUT, CHIFFRES_MAX, TERMES_MAX, TERMES_REFERENCE};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub termes: Vec<String>,
    pub ecart: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub termes: u32,

    // --- sorties ---
    pub valeur: String,  // somme flottante, six décimales
    pub exact: String,   // somme exacte p/q
    pub lecture: String, // lecture tronquée de la somme exacte
    pub erreur: String,

    // --- démarche ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,
    pub config: Configuration,
    pub taille_mot_saisie: u8,
    pub longueur_programme: u16,
    pub message_mode: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        let config = Configuration::default();
        Self {
            entree: "1.8".to_string(),
            termes: TERMES_REFERENCE,
            valeur: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            digits: CHIFFRES_DEFAUT,
            taille_mot_saisie: config.taille_mot(),
            config,
            longueur_programme: 0,
            message_mode: String::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche.
    pub fn clear_resultats(&mut self) {
        self.valeur.clear();
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// On CONSERVE le dernier résultat ; la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(
        &mut self,
        valeur: impl Into<String>,
        exact: impl Into<String>,
        lecture: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.valeur = valeur.into();
        self.exact = exact.into();
        self.lecture = lecture.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, CHIFFRES_MAX);
    }

    pub fn set_termes(&mut self, termes: u32) {
        self.termes = termes.clamp(1, TERMES_MAX);
    }

    /// Raccourci clavier : ajuste le nombre de termes, bornes comprises.
    pub fn pas_termes(&mut self, delta: i32) {
        self.set_termes(self.termes.saturating_add_signed(delta));
    }

    pub fn set_longueur_programme(&mut self, longueur: u16) {
        self.longueur_programme = longueur.min(MEMOIRE_PROGRAMME);
    }

    /// Ligne "registres=… partition=…" pour la longueur de programme saisie.
    pub fn memoire_lisible(&self) -> String {
        let registres = self.config.registres_disponibles(self.longueur_programme);
        let partition = Configuration::partition_memoire(self.longueur_programme);
        match (registres, partition) {
            (Ok(r), Ok(p)) => format!("registres={r} partition={p} octets"),
            (Err(e), _) | (_, Err(e)) => e.to_string(),
        }
    }
}
