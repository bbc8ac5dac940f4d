//! Opportunity Catalog
//!
//! Fixed set of ready-made opportunity blueprints the discovery flow draws
//! from. A blueprint is materialized into an Opportunity with a fresh id and
//! timestamp at discovery time.

use rand::Rng;

use crate::domain::aggregates::Difficulty;
use crate::domain::value_objects::Channel;

/// Blueprint an Opportunity is materialized from
#[derive(Clone, Copy, Debug)]
pub struct OpportunityBlueprint {
    pub title: &'static str,
    pub channel: Channel,
    pub niche: &'static str,
    pub difficulty: Difficulty,
    pub estimated_revenue: i64,
    pub description: &'static str,
    pub tips: [&'static str; 4],
}

static ENTRIES: [OpportunityBlueprint; 6] = [
    OpportunityBlueprint {
        title: "Criação de Bio Profissional",
        channel: Channel::Instagram,
        niche: "Personal Branding",
        difficulty: Difficulty::Easy,
        estimated_revenue: 50,
        description: "Crie bios otimizadas para perfis do Instagram que atraem seguidores e convertem em clientes.",
        tips: [
            "Use palavras-chave relevantes para o nicho",
            "Inclua call-to-action claro",
            "Destaque benefícios únicos",
            "Adicione emojis estratégicos",
        ],
    },
    OpportunityBlueprint {
        title: "Templates de Stories para Vendas",
        channel: Channel::Instagram,
        niche: "E-commerce",
        difficulty: Difficulty::Easy,
        estimated_revenue: 100,
        description: "Desenvolva templates de stories prontos para usar que aumentam conversões de produtos.",
        tips: [
            "Crie senso de urgência",
            "Use cores que chamam atenção",
            "Inclua depoimentos de clientes",
            "Adicione link direto para compra",
        ],
    },
    OpportunityBlueprint {
        title: "Mensagens de Vendas Automatizadas",
        channel: Channel::Whatsapp,
        niche: "Vendas Diretas",
        difficulty: Difficulty::Medium,
        estimated_revenue: 200,
        description: "Crie sequências de mensagens persuasivas para WhatsApp que convertem leads em clientes.",
        tips: [
            "Personalize com nome do cliente",
            "Responda objeções comuns",
            "Ofereça valor antes de vender",
            "Inclua prova social",
        ],
    },
    OpportunityBlueprint {
        title: "Legendas Virais para Reels",
        channel: Channel::Instagram,
        niche: "Criadores de Conteúdo",
        difficulty: Difficulty::Medium,
        estimated_revenue: 150,
        description: "Escreva legendas engajadoras que aumentam alcance e interação em Reels.",
        tips: [
            "Use ganchos poderosos no início",
            "Conte histórias envolventes",
            "Faça perguntas para engajamento",
            "Inclua hashtags estratégicas",
        ],
    },
    OpportunityBlueprint {
        title: "Scripts de Atendimento ao Cliente",
        channel: Channel::Whatsapp,
        niche: "Atendimento",
        difficulty: Difficulty::Easy,
        estimated_revenue: 80,
        description: "Desenvolva scripts profissionais para atendimento que melhoram satisfação do cliente.",
        tips: [
            "Seja cordial e empático",
            "Resolva problemas rapidamente",
            "Ofereça soluções alternativas",
            "Finalize com follow-up",
        ],
    },
    OpportunityBlueprint {
        title: "Campanhas de Lançamento",
        channel: Channel::Instagram,
        niche: "Infoprodutos",
        difficulty: Difficulty::Hard,
        estimated_revenue: 500,
        description: "Crie campanhas completas de lançamento para produtos digitais com alta conversão.",
        tips: [
            "Construa antecipação gradual",
            "Use storytelling emocional",
            "Ofereça bônus exclusivos",
            "Crie escassez real",
        ],
    },
];

/// Catalog lookup domain service
pub struct OpportunityCatalog;

impl OpportunityCatalog {
    pub fn entries() -> &'static [OpportunityBlueprint] {
        &ENTRIES
    }

    /// Draw one blueprint uniformly at random
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> &'static OpportunityBlueprint {
        &ENTRIES[rng.gen_range(0..ENTRIES.len())]
    }
}
