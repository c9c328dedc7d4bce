//! Static health guidance: per-category tips and a nutrition guide.

use crate::BmiCategory;

/// Three lifestyle tips for a BMI category
pub fn tips_for(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &[
            "Include healthy fats like avocados, nuts, and olive oil in your diet.",
            "Focus on strength training to build muscle mass safely.",
            "Eat smaller, frequent meals throughout the day to increase calorie intake.",
        ],
        BmiCategory::Normal => &[
            "Maintain a balanced diet rich in whole grains, fruits, and vegetables.",
            "Aim for at least 150 minutes of moderate aerobic activity weekly.",
            "Stay hydrated and monitor your sleep quality for overall wellness.",
        ],
        BmiCategory::Overweight => &[
            "Try replacing sugary drinks with water or herbal teas.",
            "Incorporate more fiber into your meals to feel fuller for longer.",
            "Start with low-impact exercises like walking or swimming.",
        ],
        BmiCategory::Obese => &[
            "Consult with a healthcare professional before starting a new intense workout.",
            "Practice portion control and mindful eating habits.",
            "Focus on consistent, sustainable lifestyle changes rather than quick fixes.",
        ],
    }
}

/// Food suggestions grouped by food group
#[derive(Clone, Copy, Debug)]
pub struct NutritionGuide {
    pub whole_grains: &'static [&'static str],
    pub fruits: &'static [&'static str],
    pub vegetables: &'static [&'static str],
}

pub const NUTRITION_GUIDE: NutritionGuide = NutritionGuide {
    whole_grains: &[
        "Quinoa",
        "Oats",
        "Brown Rice",
        "Buckwheat",
        "Whole Wheat Pasta",
        "Barley",
    ],
    fruits: &[
        "Blueberries",
        "Avocado",
        "Oranges",
        "Apples",
        "Bananas",
        "Pomegranates",
    ],
    vegetables: &[
        "Spinach",
        "Kale",
        "Broccoli",
        "Sweet Potatoes",
        "Bell Peppers",
        "Brussels Sprouts",
    ],
};

impl NutritionGuide {
    /// Food groups with their display titles
    pub fn groups(&self) -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("Whole grains", self.whole_grains),
            ("Fruits", self.fruits),
            ("Vegetables", self.vegetables),
        ]
    }
}
