//! Content Template Service
//!
//! Static Portuguese copy generation. Each category maps to a fixed template
//! with a single automatic interpolation point (the niche); bracketed markers
//! like [NOME] are manual placeholders and pass through untouched.

use crate::domain::aggregates::{AutomationKind, ServiceCategory};

const AD_TEMPLATE: &str = r#"🎯 ANÚNCIO PROFISSIONAL - {niche}

Transforme sua vida com [SEU PRODUTO/SERVIÇO]!

✨ O que você vai conquistar:
• Resultados comprovados em até 30 dias
• Método exclusivo e validado
• Suporte personalizado 24/7
• Garantia de satisfação

💎 OFERTA ESPECIAL:
De R$ 497 por apenas R$ 197
(Válido apenas hoje!)

👉 Clique no link e garanta sua vaga!

#{niche_tag} #Transformação #Resultados"#;

const SALES_PAGE_TEMPLATE: &str = r#"🚀 PÁGINA DE VENDAS - {niche}

═══════════════════════
HEADLINE PODEROSA
═══════════════════════

Descubra o método que já transformou a vida de +1.000 pessoas em [SEU NICHO]

───────────────────────
O PROBLEMA
───────────────────────

Você está cansado de:
❌ Não ver resultados reais
❌ Perder tempo com métodos que não funcionam
❌ Gastar dinheiro sem retorno

───────────────────────
A SOLUÇÃO
───────────────────────

Apresento o [NOME DO PRODUTO]:
✅ Sistema passo a passo validado
✅ Resultados em até 30 dias
✅ Suporte completo incluído

───────────────────────
DEPOIMENTOS
───────────────────────

"Mudou minha vida completamente!" - Cliente Satisfeito
⭐⭐⭐⭐⭐

───────────────────────
GARANTIA
───────────────────────

🛡️ 7 dias de garantia incondicional
Se não gostar, devolvemos 100% do seu dinheiro

───────────────────────
OFERTA ESPECIAL
───────────────────────

🎁 BÔNUS EXCLUSIVOS:
• Bônus 1: [Descrição]
• Bônus 2: [Descrição]
• Bônus 3: [Descrição]

💰 INVESTIMENTO:
De R$ 497 por apenas R$ 197

⏰ Oferta válida por tempo limitado!

👉 [BOTÃO DE COMPRA]"#;

const BIO_TEMPLATE: &str = r#"✨ Especialista em {niche}
🎯 Ajudo você a [BENEFÍCIO PRINCIPAL]
📈 +1.000 clientes transformados
💡 Método exclusivo e comprovado
👇 Comece agora - Link abaixo"#;

const STORY_TEMPLATE: &str = r#"📸 STORY DE VENDAS - {niche}

[SLIDE 1]
🔥 ATENÇÃO!
Você não pode perder isso...

[SLIDE 2]
O que você vai ganhar:
✅ Benefício 1
✅ Benefício 2
✅ Benefício 3

[SLIDE 3]
💰 OFERTA ESPECIAL
R$ 197 (por tempo limitado!)

[SLIDE 4]
⏰ ÚLTIMAS VAGAS!
Arrasta pra cima e garanta a sua
👆👆👆"#;

const MESSAGE_TEMPLATE: &str = r#"💬 MENSAGEM WHATSAPP - {niche}

Olá [NOME]! 👋

Tudo bem? Sou [SEU NOME], especialista em {niche}.

Vi que você tem interesse em [TÓPICO] e queria te mostrar algo que pode te ajudar muito! 🎯

Desenvolvi um método exclusivo que já ajudou +1.000 pessoas a [RESULTADO DESEJADO].

Posso te enviar mais detalhes? É rapidinho! 😊

Aguardo seu retorno! ✨"#;

const WELCOME_MESSAGE: &str = r#"Olá [NOME]! 👋

Seja muito bem-vindo(a)! 

Estou muito feliz em ter você aqui. 

Em breve você receberá mais informações sobre [SEU PRODUTO/SERVIÇO].

Qualquer dúvida, estou à disposição! 😊"#;

const FOLLOW_UP_MESSAGE: &str = r#"Oi [NOME]! 

Vi que você demonstrou interesse em [PRODUTO/SERVIÇO].

Tem alguma dúvida que eu possa esclarecer?

Estou aqui para te ajudar! 💙"#;

const DELIVERY_MESSAGE: &str = r#"🎉 Parabéns, [NOME]!

Seu acesso ao [PRODUTO] está liberado!

📥 Link de acesso: [LINK]
🔑 Senha: [SENHA]

Aproveite e qualquer dúvida, me chame! ✨"#;

const REMINDER_MESSAGE: &str = r#"Oi [NOME]! 

Notei que seu pagamento ainda está pendente.

Você tem até [DATA] para garantir sua vaga com o desconto especial!

Posso te ajudar com algo? 😊"#;

const NICHES: &[&str] = &[
    "Fitness e Saúde",
    "Beleza e Estética",
    "Educação Online",
    "Marketing Digital",
    "Desenvolvimento Pessoal",
    "E-commerce",
    "Alimentação Saudável",
    "Finanças Pessoais",
    "Moda e Estilo",
    "Tecnologia",
];

/// Content generation domain service
pub struct ContentTemplateService;

impl ContentTemplateService {
    /// Render the category's template for a niche
    ///
    /// Deterministic and pure. The ad template also embeds the niche as a
    /// whitespace-free hashtag.
    pub fn render(category: ServiceCategory, niche: &str) -> String {
        match category {
            ServiceCategory::Ad => AD_TEMPLATE
                .replace("{niche}", niche)
                .replace("{niche_tag}", &Self::hashtag(niche)),
            ServiceCategory::SalesPage => SALES_PAGE_TEMPLATE.replace("{niche}", niche),
            ServiceCategory::Bio => BIO_TEMPLATE.replace("{niche}", niche),
            ServiceCategory::Story => STORY_TEMPLATE.replace("{niche}", niche),
            ServiceCategory::Message => MESSAGE_TEMPLATE.replace("{niche}", niche),
        }
    }

    /// Default message body for a new automation of the given kind
    pub fn default_message(kind: AutomationKind) -> &'static str {
        match kind {
            AutomationKind::Welcome => WELCOME_MESSAGE,
            AutomationKind::FollowUp => FOLLOW_UP_MESSAGE,
            AutomationKind::Delivery => DELIVERY_MESSAGE,
            AutomationKind::Reminder => REMINDER_MESSAGE,
        }
    }

    /// Suggested market niches (the niche field itself is free text)
    pub fn niches() -> &'static [&'static str] {
        NICHES
    }

    fn hashtag(niche: &str) -> String {
        niche.split_whitespace().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let first = ContentTemplateService::render(ServiceCategory::Story, "E-commerce");
        let second = ContentTemplateService::render(ServiceCategory::Story, "E-commerce");
        assert_eq!(first, second);
    }

    #[test]
    fn test_bio_template_for_fitness_niche() {
        let content = ContentTemplateService::render(ServiceCategory::Bio, "Fitness e Saúde");

        assert!(content.starts_with("✨ Especialista em Fitness e Saúde"));
        assert!(content.contains("[BENEFÍCIO PRINCIPAL]"));
        assert!(!content.contains("{niche}"));
    }

    #[test]
    fn test_ad_hashtag_compacts_niche() {
        let content = ContentTemplateService::render(ServiceCategory::Ad, "Fitness e Saúde");

        assert!(content.starts_with("🎯 ANÚNCIO PROFISSIONAL - Fitness e Saúde"));
        assert!(content.contains("#FitnesseSaúde #Transformação #Resultados"));
    }

    #[test]
    fn test_message_template_repeats_niche() {
        let content = ContentTemplateService::render(ServiceCategory::Message, "Tecnologia");
        assert_eq!(content.matches("Tecnologia").count(), 2);
    }

    #[test]
    fn test_manual_placeholders_pass_through() {
        let content = ContentTemplateService::render(ServiceCategory::SalesPage, "Moda e Estilo");

        assert!(content.contains("[NOME DO PRODUTO]"));
        assert!(content.contains("[BOTÃO DE COMPRA]"));
        assert_eq!(content.matches("Moda e Estilo").count(), 1);
    }

    #[test]
    fn test_default_messages_carry_placeholders() {
        for kind in AutomationKind::all() {
            assert!(ContentTemplateService::default_message(kind).contains("[NOME]"));
        }
        assert!(ContentTemplateService::default_message(AutomationKind::Welcome)
            .contains("Seja muito bem-vindo(a)!"));
    }

    #[test]
    fn test_niche_catalog() {
        let niches = ContentTemplateService::niches();
        assert_eq!(niches.len(), 10);
        assert!(niches.contains(&"Fitness e Saúde"));
        assert!(niches.contains(&"Finanças Pessoais"));
    }
}
