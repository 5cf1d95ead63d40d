use serde::{Deserialize, Serialize};

/// Тип местности клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    /// Центральная клетка поля
    Zeus,
    Sea,
    Shallow,
    Monsters,
    Cubes,
    Temple,
    Clouds,
    City,
    /// Фундаменты. Генератор «пьяного блуждания» также использует этот тип
    /// как временную «неразмеченную сушу» до финальной расстановки.
    Foundations,
}

impl Terrain {
    pub const ALL: [Terrain; 9] = [
        Terrain::Zeus,
        Terrain::Sea,
        Terrain::Shallow,
        Terrain::Monsters,
        Terrain::Cubes,
        Terrain::Temple,
        Terrain::Clouds,
        Terrain::City,
        Terrain::Foundations,
    ];

    /// Клетка входит в водную сеть (море, мелководье или центр)
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(self, Terrain::Sea | Terrain::Shallow | Terrain::Zeus)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Terrain::Zeus => "zeus",
            Terrain::Sea => "sea",
            Terrain::Shallow => "shallow",
            Terrain::Monsters => "monsters",
            Terrain::Cubes => "cubes",
            Terrain::Temple => "temple",
            Terrain::Clouds => "clouds",
            Terrain::City => "city",
            Terrain::Foundations => "foundations",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Цвет игрока, которым помечена клетка. На генерацию не влияет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    None,
    Red,
    Pink,
    Blue,
    Black,
    Green,
    Yellow,
}
