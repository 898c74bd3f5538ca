use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::Serialize;

/// Damage element carried by a weapon.
///
/// The set is closed. Variants are declared in catalog order, which is the
/// order `Element::all` yields them and the index into `REGISTRY`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    #[default]
    #[sea_orm(string_value = "NEUTRAL")]
    Neutral,
    #[sea_orm(string_value = "FIRE")]
    Fire,
    #[sea_orm(string_value = "ICE")]
    Ice,
    #[sea_orm(string_value = "LIGHTNING")]
    Lightning,
    #[sea_orm(string_value = "EARTH")]
    Earth,
    #[sea_orm(string_value = "WATER")]
    Water,
    #[sea_orm(string_value = "WIND")]
    Wind,
    #[sea_orm(string_value = "NATURE")]
    Nature,
    #[sea_orm(string_value = "HOLY")]
    Holy,
    #[sea_orm(string_value = "BRIMSTONE")]
    Brimstone,
    #[sea_orm(string_value = "HOLY_FLAMES")]
    HolyFlames,
    #[sea_orm(string_value = "SHADOWFLAME")]
    Shadowflame,
    #[sea_orm(string_value = "ASTRAL")]
    Astral,
    #[sea_orm(string_value = "PLAGUE")]
    Plague,
    #[sea_orm(string_value = "GOD_SLAYER")]
    GodSlayer,
    #[sea_orm(string_value = "SULPHURIC")]
    Sulphuric,
    #[sea_orm(string_value = "SHADOW")]
    Shadow,
    #[sea_orm(string_value = "BLOOD")]
    Blood,
    #[sea_orm(string_value = "CRYSTAL")]
    Crystal,
    #[sea_orm(string_value = "ARCANE")]
    Arcane,
    #[sea_orm(string_value = "ELEMENTAL")]
    Elemental,
    #[sea_orm(string_value = "COSMIC")]
    Cosmic,
    #[sea_orm(string_value = "TEMPORAL")]
    Temporal,
    #[sea_orm(string_value = "ABYSSAL")]
    Abyssal,
    #[sea_orm(string_value = "TOXIC")]
    Toxic,
    #[sea_orm(string_value = "OMNI")]
    Omni,
    #[sea_orm(string_value = "MAGIC")]
    Magic,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ElementAttributes {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub effect_key: &'static str,
    pub has_effect: bool,
    pub color: &'static str,
}

const fn attrs(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    effect_key: &'static str,
    has_effect: bool,
    color: &'static str,
) -> ElementAttributes {
    ElementAttributes {
        name,
        display_name,
        description,
        effect_key,
        has_effect,
        color,
    }
}

pub const ELEMENT_COUNT: usize = 27;

// Indexed by `Element as usize`.
static REGISTRY: [ElementAttributes; ELEMENT_COUNT] = [
    attrs(
        "NEUTRAL",
        "Neutro",
        "Sem elemento especial. Dano puro.",
        "default",
        false,
        "#808080",
    ),
    attrs(
        "FIRE",
        "Fogo",
        "Causa queimadura. Dano contínuo por 7 segundos. Afeta inimigos normalmente.",
        "fire",
        true,
        "#FF6B35",
    ),
    attrs(
        "ICE",
        "Gelo",
        "Congela inimigos, reduzindo sua velocidade. Efeito de desaceleração.",
        "ice",
        true,
        "#4DB8FF",
    ),
    attrs(
        "LIGHTNING",
        "Trovão",
        "Causa descarga elétrica. Pode saltar entre inimigos próximos.",
        "lightning",
        true,
        "#FFD700",
    ),
    attrs(
        "EARTH",
        "Terra",
        "Dano de terra. Aumenta peso e reduz movimento. Raro em armas.",
        "earth",
        true,
        "#8B4513",
    ),
    attrs(
        "WATER",
        "Água",
        "Elemento aquático. Bônus em ambientes molhados. Raramente usado.",
        "water",
        true,
        "#1E90FF",
    ),
    attrs(
        "WIND",
        "Vento",
        "Elemento do vento. Aumenta velocidade do projétil. Knockback elevado.",
        "wind",
        true,
        "#87CEEB",
    ),
    attrs(
        "NATURE",
        "Natureza",
        "Elemento da natureza. Regeneração leve e crescimento vegetal.",
        "nature",
        true,
        "#228B22",
    ),
    attrs(
        "HOLY",
        "Sagrado",
        "Dano sagrado/divino. Muito efetivo contra inimigos sombrios e demoníacos. Cura aliados próximos.",
        "holy",
        true,
        "#FFD700",
    ),
    attrs(
        "BRIMSTONE",
        "Enxofre (Brimstone)",
        "Elemento sulfuroso do Calamity. Causa queimadura intensa e poluição. Muito tóxico.",
        "brimstone",
        true,
        "#FF4500",
    ),
    attrs(
        "HOLY_FLAMES",
        "Chamas Sagradas (Holy Flames)",
        "Chamas divinas que purificam corrupção. Efetivo contra Providence. Regeneração para o jogador.",
        "holy_flames",
        true,
        "#FFD700",
    ),
    attrs(
        "SHADOWFLAME",
        "Shadowflame",
        "Chamas sombrias que causam escuridão e dano contínuo. Reduz defesa inimiga.",
        "shadowflame",
        true,
        "#2F4F4F",
    ),
    attrs(
        "ASTRAL",
        "Astral",
        "Poder das estrelas e do cosmos. Ignora defesa parcial. Projéteis homing.",
        "astral",
        true,
        "#9932CC",
    ),
    attrs(
        "PLAGUE",
        "Praga (Plague)",
        "Veneno virulento que se espalha entre inimigos. Debilita significativamente.",
        "plague",
        true,
        "#32CD32",
    ),
    attrs(
        "GOD_SLAYER",
        "Destruidor de Deuses (God Slayer)",
        "Poder absoluto que mata deuses. Resistência a todos os elementos. Dano cataclísmico.",
        "god_slayer",
        true,
        "#DC143C",
    ),
    attrs(
        "SULPHURIC",
        "Sulfúrico (Sulphuric)",
        "Ácido sulfúrico que corrói armaduras. Reduz resistência do inimigo significativamente.",
        "sulphuric",
        true,
        "#ADFF2F",
    ),
    attrs(
        "SHADOW",
        "Sombra",
        "Dano obscuro e sombrio. Associado à corrupção. Efeito de escuridão.",
        "shadow",
        true,
        "#2F2F2F",
    ),
    attrs(
        "BLOOD",
        "Sangue",
        "Sangue corrompido. Causa sangramento contínuo. Vida roubada do inimigo.",
        "blood",
        true,
        "#8B0000",
    ),
    attrs(
        "CRYSTAL",
        "Cristal",
        "Cristais que ricocheteiam. Dano mágico puro com penetração.",
        "crystal",
        true,
        "#00CED1",
    ),
    attrs(
        "ARCANE",
        "Arcano",
        "Magia arcana pura. Ignora enchantments normais. Dano mágico elevado.",
        "arcane",
        true,
        "#7B68EE",
    ),
    attrs(
        "ELEMENTAL",
        "Elemental",
        "Combinação de múltiplos elementos (Fogo + Gelo + Trovão). Efeitos variados.",
        "elemental",
        true,
        "#FF69B4",
    ),
    attrs(
        "COSMIC",
        "Cósmico",
        "Poder universal dos cosmos. Dano absoluto que transcende elementos normais. Aura cósmica.",
        "cosmic",
        true,
        "#4169E1",
    ),
    attrs(
        "TEMPORAL",
        "Temporal",
        "Controle do tempo. Distorção temporal que afeta velocidade inimiga.",
        "temporal",
        true,
        "#00BFFF",
    ),
    attrs(
        "ABYSSAL",
        "Abissal",
        "Profundezas do abismo. Pressão absoluta e dano desconhecido. Summoning entities.",
        "abyssal",
        true,
        "#191970",
    ),
    attrs(
        "TOXIC",
        "Tóxico",
        "Veneno puro que se espalha em nuvem. Debilita defensas e velocidade.",
        "toxic",
        true,
        "#00FF00",
    ),
    attrs(
        "OMNI",
        "Omni (Supremo)",
        "Todos os elementos em um. Poder infinito que combina tudo. Arma final suprema.",
        "omni",
        true,
        "#FF1493",
    ),
    attrs(
        "MAGIC",
        "Mágico",
        "Magia geral. Dano mágico puro sem elemento específico.",
        "magic",
        true,
        "#9370DB",
    ),
];

impl Element {
    /// Every element in catalog order.
    pub fn all() -> impl Iterator<Item = Element> {
        Element::iter()
    }

    pub fn attributes(self) -> &'static ElementAttributes {
        &REGISTRY[self as usize]
    }

    /// Canonical upper-case name, as stored and as accepted by the resolver.
    pub fn name(self) -> &'static str {
        self.attributes().name
    }

    pub fn display_name(self) -> &'static str {
        self.attributes().display_name
    }

    pub fn description(self) -> &'static str {
        self.attributes().description
    }

    pub fn effect_key(self) -> &'static str {
        self.attributes().effect_key
    }

    pub fn has_effect(self) -> bool {
        self.attributes().has_effect
    }

    pub fn color(self) -> &'static str {
        self.attributes().color
    }
}
