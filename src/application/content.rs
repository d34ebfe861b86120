//! Body content blocks for generated landing pages.
//!
//! Each block interpolates the entry's own city, niche or neighborhood into
//! every sentence, not only into headings. Two entries of the same kind
//! therefore never share a paragraph or FAQ answer, which keeps the generated
//! set from being classified as doorway content.
//!
//! All generators are total: the fallback subject gets a generic intro and
//! empty local/FAQ blocks so a renderer can simply skip those sections.

use crate::application::metadata::PRODUCT_NAME;
use crate::domain::entities::{FaqItem, PageEntry, PageSubject};

/// Two introductory paragraphs framing the page's scope.
pub fn intro_block(entry: &PageEntry) -> Vec<String> {
    match entry.subject() {
        PageSubject::City { city } => vec![
            format!(
                "{city} concentra milhares de empresas ativas, e encontrar as que realmente \
                 precisam do seu produto exige mais do que uma busca genérica. O {PRODUCT_NAME} \
                 reúne dados públicos das empresas de {city} em uma lista de prospecção organizada."
            ),
            format!(
                "Veja como equipes comerciais usam o {PRODUCT_NAME} para gerar leads B2B em \
                 {city}, de negócios de bairro a empresas de médio porte."
            ),
        ],
        PageSubject::CityNiche { niche, city } => {
            let niche = niche.to_lowercase();
            vec![
                format!(
                    "Prospectar {niche} em {city} exige saber quem já atua no mercado local, \
                     onde cada negócio está e como ele se posiciona."
                ),
                format!(
                    "O {PRODUCT_NAME} mapeia {niche} em {city} e entrega uma lista pronta para \
                     abordagem, com dados de contato e indicadores de presença digital."
                ),
            ]
        }
        PageSubject::Neighborhood { neighborhood } => vec![
            format!(
                "O bairro {neighborhood} tem um perfil próprio de comércio e serviços, e \
                 prospectar ali pede um olhar mais próximo do que o da cidade inteira."
            ),
            format!(
                "O {PRODUCT_NAME} mostra as empresas ativas no bairro {neighborhood} para você \
                 planejar visitas e abordagens com contexto local."
            ),
        ],
        PageSubject::Fallback => vec![
            format!(
                "O {PRODUCT_NAME} ajuda equipes comerciais a encontrar empresas com potencial \
                 de compra a partir de dados públicos e sinais de atividade online."
            ),
            "Escolha uma cidade ou um segmento para ver oportunidades de prospecção B2B \
             organizadas por região."
                .to_string(),
        ],
    }
}

/// Two paragraphs describing platform capabilities framed for the entry.
///
/// Empty for the fallback subject.
pub fn local_block(entry: &PageEntry) -> Vec<String> {
    match entry.subject() {
        PageSubject::City { city } => vec![
            format!(
                "Filtre empresas de {city} por segmento, porte e tempo de atividade, e exporte \
                 apenas os contatos que fazem sentido para a sua oferta."
            ),
            format!(
                "Acompanhe a concorrência em {city} e use a análise de viabilidade para decidir \
                 em quais regiões da cidade vale a pena concentrar esforços."
            ),
        ],
        PageSubject::CityNiche { niche, city } => {
            let niche = niche.to_lowercase();
            vec![
                format!(
                    "Veja quantos {niche} estão ativos em {city}, como se distribuem pelos \
                     bairros e quais ainda têm presença digital fraca."
                ),
                format!(
                    "Gere abordagens personalizadas para {niche} de {city} com os playbooks do \
                     {PRODUCT_NAME} e acompanhe cada oportunidade no seu funil."
                ),
            ]
        }
        PageSubject::Neighborhood { neighborhood } => vec![
            format!(
                "Liste as empresas do bairro {neighborhood} por segmento e descubra quais estão \
                 abrindo ou expandindo."
            ),
            format!(
                "Compare a densidade de negócios do bairro {neighborhood} com regiões vizinhas \
                 antes de definir sua rota comercial."
            ),
        ],
        PageSubject::Fallback => Vec::new(),
    }
}

/// Question and answer pairs with the entry's names in both question and answer.
///
/// Empty for the fallback subject.
pub fn faq_block(entry: &PageEntry) -> Vec<FaqItem> {
    match entry.subject() {
        PageSubject::City { city } => vec![
            FaqItem::new(
                format!("Como gerar leads B2B em {city}?"),
                format!(
                    "Defina seu perfil de cliente ideal, filtre as empresas de {city} no \
                     {PRODUCT_NAME} por segmento e porte, e priorize os contatos com maior \
                     pontuação."
                ),
            ),
            FaqItem::new(
                format!("Quais segmentos posso prospectar em {city}?"),
                format!(
                    "Todos os segmentos com empresas registradas em {city}, incluindo saúde, \
                     serviços profissionais, comércio e alimentação."
                ),
            ),
            FaqItem::new(
                format!("Os dados das empresas de {city} são atualizados?"),
                format!(
                    "Sim. As informações sobre {city} são atualizadas periodicamente a partir de \
                     fontes públicas e de sinais de atividade online."
                ),
            ),
        ],
        PageSubject::CityNiche { niche, city } => {
            let niche = niche.to_lowercase();
            vec![
                FaqItem::new(
                    format!("Quantos {niche} existem em {city}?"),
                    format!(
                        "O número muda com frequência. O {PRODUCT_NAME} mostra a contagem \
                         atualizada de {niche} ativos em {city} assim que você faz a busca."
                    ),
                ),
                FaqItem::new(
                    format!("Como abordar {niche} em {city}?"),
                    format!(
                        "Comece pelos {niche} de {city} com maior pontuação de oportunidade e use \
                         um playbook de abordagem adaptado ao segmento."
                    ),
                ),
                FaqItem::new(
                    format!("Posso exportar a lista de {niche} de {city}?"),
                    format!(
                        "Sim. A lista de {niche} em {city} pode ser exportada com nome, endereço, \
                         telefone e site quando disponíveis."
                    ),
                ),
            ]
        }
        PageSubject::Neighborhood { neighborhood } => vec![
            FaqItem::new(
                format!("Quais empresas atuam no bairro {neighborhood}?"),
                format!(
                    "O {PRODUCT_NAME} lista as empresas ativas no bairro {neighborhood} com \
                     segmento, endereço e contato."
                ),
            ),
            FaqItem::new(
                format!("Vale a pena prospectar no bairro {neighborhood}?"),
                format!(
                    "Use a análise de viabilidade do {PRODUCT_NAME} para comparar o bairro \
                     {neighborhood} com outras regiões antes de decidir."
                ),
            ),
        ],
        PageSubject::Fallback => Vec::new(),
    }
}
