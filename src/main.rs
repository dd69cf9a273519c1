// src/main.rs
//
// Calculatrice Voyager — point d’entrée NATIF (CLI + GUI) + WEB (WASM)
// -------------------------------------------------------------------
// - NATIF sans option : une ligne, sin(1.8) par 5 termes au format "%f"
// - NATIF --gui       : eframe::run_native + NativeOptions
// - WEB  (wasm32)     : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Voyager";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::process::ExitCode;

    use clap::Parser;
    use log::error;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::noyau::{
        calcule_sinus, Base, Configuration, ErreurNoyau, Mode, ANGLE_REFERENCE, CHIFFRES_DEFAUT,
        TERMES_REFERENCE,
    };

    /// Code de sortie pour une entrée refusée.
    const SORTIE_ERREUR: u8 = 2;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_voyager")]
    #[command(about = "sin(x) par série de Taylor tronquée (calcul à la main)")]
    pub struct Cli {
        /// Angle en radians (décimal)
        #[arg(long, default_value_t = ANGLE_REFERENCE.to_string())]
        angle: String,

        /// Nombre de termes de la série
        #[arg(long, default_value_t = TERMES_REFERENCE)]
        termes: u32,

        /// Affiche aussi la somme exacte et sa lecture tronquée
        #[arg(long)]
        exact: bool,

        /// Chiffres de la lecture tronquée
        #[arg(long, default_value_t = CHIFFRES_DEFAUT)]
        chiffres: usize,

        /// Affiche chaque terme de la série
        #[arg(long)]
        demarche: bool,

        /// Mode de représentation : 1c, 2c ou u (exclusif avec le calcul du sinus)
        #[arg(
            long,
            conflicts_with_all = ["angle", "termes", "exact", "chiffres", "demarche"]
        )]
        mode: Option<String>,

        /// Taille de mot (avec --mode, 16 par défaut)
        #[arg(long, requires = "mode")]
        taille_mot: Option<u8>,

        /// Base d'entrée (avec --mode) : 2, 8, 10, 16 ou bin, oct, dec, hex
        #[arg(long, requires = "mode")]
        base: Option<String>,

        /// Longueur du programme en octets (avec --mode) : affiche registres et partition
        #[arg(long, requires = "mode")]
        programme: Option<u16>,

        /// Registres de données utilisés par le programme (avec --programme)
        #[arg(long, requires = "programme")]
        registres: Option<u32>,

        /// Ouvre la fenêtre egui
        #[arg(long)]
        gui: bool,
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();

        if cli.gui {
            return match lance_gui() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("eframe : {e}");
                    ExitCode::FAILURE
                }
            };
        }

        match execute(&cli) {
            Ok(lignes) => {
                for l in lignes {
                    println!("{l}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::from(SORTIE_ERREUR)
            }
        }
    }

    /// Lignes à imprimer sur stdout ; la première est toujours la valeur "%f".
    pub fn execute(cli: &Cli) -> Result<Vec<String>, ErreurNoyau> {
        let mut lignes = Vec::new();

        if let Some(m) = &cli.mode {
            let mut config = Configuration::default();
            let taille_mot = cli.taille_mot.unwrap_or(config.taille_mot());
            config.set_mode(Mode::depuis_texte(m)?, taille_mot)?;
            if let Some(b) = &cli.base {
                config.set_base(Base::depuis_texte(b)?);
            }
            lignes.push(config.to_string());

            if let Some(longueur) = cli.programme {
                let disponibles = config.verifie_registres(longueur, cli.registres.unwrap_or(0))?;
                let partition = Configuration::partition_memoire(longueur)?;
                lignes.push(format!(
                    "programme={longueur} registres_disponibles={disponibles} partition={partition}"
                ));
            }
            return Ok(lignes);
        }

        let r = calcule_sinus(&cli.angle, cli.termes, cli.chiffres)?;
        lignes.push(r.ligne);

        if cli.demarche {
            lignes.extend(r.demarche.termes);
        }
        if cli.exact {
            lignes.push(r.exact);
            lignes.push(r.lecture);
        }
        Ok(lignes)
    }

    fn lance_gui() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([560.0, 740.0])
                .with_min_inner_size([420.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
