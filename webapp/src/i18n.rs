use dioxus::prelude::*;
use tracing::{debug, warn};

use api::locale::{Locale, SetLocaleReq, get_locale, set_locale};

// a handful of interface labels per locale, columns in Locale::ALL order
//
// an empty cell falls back to english, a missing row falls back to the key itself
const LABELS: &[(&str, [&str; 3])] = &[
    ("nav.projects", ["Projects", "Proyectos", "Progetti"]),
    ("nav.experience", ["Experience", "Experiencia", "Esperienza"]),
    ("nav.certifications", ["Certifications", "Certificaciones", "Certificazioni"]),
    ("nav.contact", ["Contact", "Contacto", "Contatti"]),
    ("nav.theme_previous", ["Previous theme", "Tema anterior", "Tema precedente"]),
    ("nav.theme_next", ["Next theme", "Tema siguiente", "Tema successivo"]),
    ("hero.greeting", ["Hi, I build things for the web", "Hola, construyo cosas para la web", "Ciao, costruisco cose per il web"]),
    ("hero.subtitle", ["Web apps, desktop tools and the odd library", "Aplicaciones web, herramientas de escritorio y alguna librería", "App web, strumenti desktop e qualche libreria"]),
    ("tech.title", ["Tech stack", "Tecnologías", "Tecnologie"]),
    ("work.title", ["Projects", "Proyectos", "Progetti"]),
    ("work.filterByTech", ["Filter by tech...", "Filtrar por tecnología...", "Filtra per tecnologia..."]),
    ("work.searchPlaceholder", ["Search technologies...", "Buscar tecnologías...", "Cerca tecnologie..."]),
    ("work.noResults", ["No technologies found", "No se encontraron tecnologías", "Nessuna tecnologia trovata"]),
    ("work.clear", ["Clear filters", "Quitar filtros", "Rimuovi filtri"]),
    ("work.empty", ["No projects match these filters", "Ningún proyecto coincide con estos filtros", "Nessun progetto corrisponde a questi filtri"]),
    ("work.previous", ["Previous", "Anterior", "Precedente"]),
    ("work.next", ["Next", "Siguiente", "Successivo"]),
    ("work.categories.websites", ["Websites", "Sitios web", "Siti web"]),
    ("work.categories.webapps", ["Web apps", "Aplicaciones web", "App web"]),
    ("work.categories.desktop", ["Desktop", "Escritorio", "Desktop"]),
    ("work.categories.mobile", ["Mobile", "Móvil", "Mobile"]),
    ("work.categories.extensions", ["Extensions", "Extensiones", "Estensioni"]),
    ("work.categories.libraries", ["Libraries", "Librerías", "Librerie"]),
    ("work.categories.tools", ["Tools", "Herramientas", "Strumenti"]),
    ("detail.back", ["Back to projects", "Volver a proyectos", "Torna ai progetti"]),
    ("detail.repo", ["Source code", "Código fuente", "Codice sorgente"]),
    ("detail.website", ["Visit website", "Visitar sitio", "Visita il sito"]),
    ("detail.installer", ["Download", "Descargar", "Scarica"]),
    ("experience.title", ["Experience", "Experiencia", "Esperienza"]),
    ("experience.visit", ["Visit", "Visitar", "Visita"]),
    ("certs.title", ["Certifications", "Certificaciones", "Certificazioni"]),
    ("certs.view", ["View credential", "Ver credencial", "Vedi credenziale"]),
    ("contact.title", ["Get in touch", "Contáctame", "Contattami"]),
    ("contact.name", ["Name", "Nombre", "Nome"]),
    ("contact.email", ["Email", "Correo", "Email"]),
    ("contact.message", ["Message", "Mensaje", "Messaggio"]),
    ("contact.send", ["Send", "Enviar", "Invia"]),
    ("contact.sending", ["Sending...", "Enviando...", "Invio in corso..."]),
    ("contact.success", ["Thanks, your message is on its way", "Gracias, tu mensaje está en camino", "Grazie, il tuo messaggio è in viaggio"]),
    ("contact.error", ["Something went wrong, please try again", "Algo salió mal, inténtalo de nuevo", "Qualcosa è andato storto, riprova"]),
    ("toast.theme", ["Theme", "Tema", "Tema"]),
    ("notFound.title", ["Nothing lives here", "Aquí no hay nada", "Qui non c'è niente"]),
    ("projects.findthagame.description", ["Describe a game you half remember and get its name back", "", ""]),
    ("projects.ocr-to-txt.description", ["Drop in scans, get plain text files out", "", ""]),
    ("projects.lease-sentinel.description", ["Tracks lease deadlines and nags you before they pass", "", ""]),
    ("projects.palindot.description", ["A social network where every post reads the same backwards", "", ""]),
    ("projects.shell-c.description", ["A small unix shell written in C", "", ""]),
    ("projects.retro-notes.description", ["A note taking app dressed as an old terminal", "", ""]),
    ("projects.exhale-app.description", ["Guided breathing exercises for the browser", "", ""]),
    ("projects.useless-polymath.description", ["Useless facts, served daily", "", ""]),
    ("projects.civy.description", ["Builds a clean resume from a few questions", "", ""]),
    ("projects.react-three-text-fx.description", ["Text effects for react-three-fiber scenes", "", ""]),
    ("projects.openrise-www.description", ["Marketing site for an open source studio", "", ""]),
    ("projects.te-filter.description", ["Browser extension that filters timelines by keyword", "", ""]),
];

fn column(locale: Locale) -> usize {
    match locale {
        Locale::En => 0,
        Locale::Es => 1,
        Locale::It => 2,
    }
}

pub fn tr(locale: Locale, key: &str) -> &str {
    let Some((_, cells)) = LABELS.iter().find(|(k, _)| *k == key) else {
        return key;
    };

    match cells[column(locale)] {
        "" => cells[0],
        label => label,
    }
}

pub fn language_name(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::Es => "Español",
        Locale::It => "Italiano",
    }
}

fn set_document_lang(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(err) = root.set_attribute("lang", locale.code()) {
            warn!("failed to set document language: {err:?}");
        }
    }
}

// the server knows the cookie and the browser's languages, so it decides the starting
// locale; until it answers the page renders in english
pub fn use_locale_provider() -> Signal<Locale> {
    let mut locale = use_context_provider(|| Signal::new(Locale::default()));

    use_future(move || async move {
        match get_locale().await {
            Ok(resp) => {
                debug!(locale = %resp.locale, "server resolved locale");
                locale.set(resp.locale);
            }
            Err(err) => warn!("failed to resolve locale, staying with default: {err}"),
        }
    });

    use_effect(move || set_document_lang(locale()));

    locale
}

pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

// switch right away and let the server remember it for the next visit
pub async fn switch_locale(mut locale: Signal<Locale>, next: Locale) {
    if *locale.peek() == next {
        return;
    }

    locale.set(next);

    if let Err(err) = set_locale(&SetLocaleReq { locale: next }).await {
        warn!("failed to persist locale {next}: {err}");
    }
}

#[component]
pub fn LanguageSwitcher() -> Element {
    let locale = use_locale();

    rsx! {
        div { class: "language-switcher",
            for option in Locale::ALL {
                button {
                    key: "{option}",
                    class: if locale() == option { "btn active" } else { "btn" },
                    title: language_name(option),
                    onclick: move |_| async move { switch_locale(locale, option).await },
                    "{option.code().to_uppercase()}"
                }
            }
        }
    }
}
