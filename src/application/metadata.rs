//! Title and meta-description synthesis.

use crate::domain::entities::{PageEntry, PageSubject};

/// Product name appended to page titles.
pub const PRODUCT_NAME: &str = "LeadRadar";

/// Returns the `<title>` text for an entry.
pub fn page_title(entry: &PageEntry) -> String {
    match entry.subject() {
        PageSubject::City { city } => {
            format!("Geração de Leads B2B em {city} | {PRODUCT_NAME}")
        }
        PageSubject::CityNiche { niche, city } => {
            format!("Prospecção B2B de {niche} em {city} | {PRODUCT_NAME}")
        }
        PageSubject::Neighborhood { neighborhood } => {
            format!("Empresas no bairro {neighborhood} | {PRODUCT_NAME}")
        }
        PageSubject::Fallback => site_title(),
    }
}

/// Returns the meta-description text for an entry.
pub fn page_description(entry: &PageEntry) -> String {
    match entry.subject() {
        PageSubject::City { city } => format!(
            "Encontre e qualifique empresas em {city} com a inteligência de negócios do \
             {PRODUCT_NAME}: dados públicos, contatos e análise de viabilidade em um só lugar."
        ),
        PageSubject::CityNiche { niche, city } => {
            let niche = niche.to_lowercase();
            format!(
                "Prospecte {niche} em {city} com listas segmentadas, dados de contato e \
                 análise do mercado local no {PRODUCT_NAME}."
            )
        }
        PageSubject::Neighborhood { neighborhood } => format!(
            "Mapeie empresas e oportunidades B2B no bairro {neighborhood} e planeje sua \
             prospecção local com o {PRODUCT_NAME}."
        ),
        PageSubject::Fallback => site_description(),
    }
}

/// Product-level title, used by the home page and by malformed entries.
pub fn site_title() -> String {
    format!("{PRODUCT_NAME} | Inteligência de prospecção B2B")
}

/// Product-level description, used by the home page and by malformed entries.
pub fn site_description() -> String {
    format!(
        "{PRODUCT_NAME} reúne dados públicos de empresas, pontuação de oportunidades e \
         playbooks de abordagem para equipes comerciais B2B."
    )
}
