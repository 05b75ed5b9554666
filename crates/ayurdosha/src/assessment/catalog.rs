use super::dosha::Dosha;

/// Condition governed by one dosha, with the guidance shown alongside its risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub prevention: &'static str,
    pub routine: &'static str,
    pub diet: &'static str,
    pub dosha: Dosha,
}

/// Read-only catalog of ten conditions per dosha, grouped Vata, Pitta, Kapha.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseCatalog {
    entries: &'static [DiseaseEntry],
}

impl DiseaseCatalog {
    pub fn standard() -> Self {
        Self { entries: &ENTRIES }
    }

    pub fn entries_for(&self, dosha: Dosha) -> impl Iterator<Item = &'static DiseaseEntry> {
        let entries = self.entries;
        entries.iter().filter(move |entry| entry.dosha == dosha)
    }

    pub fn find(&self, name: &str) -> Option<&'static DiseaseEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DiseaseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const fn entry(
    dosha: Dosha,
    name: &'static str,
    description: &'static str,
    prevention: &'static str,
    routine: &'static str,
    diet: &'static str,
) -> DiseaseEntry {
    DiseaseEntry {
        name,
        description,
        prevention,
        routine,
        diet,
        dosha,
    }
}

static ENTRIES: [DiseaseEntry; 30] = [
    entry(
        Dosha::Vata,
        "Arthritis (Osteoarthritis)",
        "Degeneration of joints due to Vata dryness.",
        "Daily oil massage (Abhyanga) with sesame oil.",
        "Gentle yoga, warm baths.",
        "Warm, cooked foods, ghee, nuts.",
    ),
    entry(
        Dosha::Vata,
        "Sciatica",
        "Nerve pain caused by Vata compression.",
        "Avoid cold drafts, keep lower back warm.",
        "Stretching, rest.",
        "Garlic milk, turmeric.",
    ),
    entry(
        Dosha::Vata,
        "Insomnia",
        "Racing mind and inability to sleep.",
        "Regular sleep schedule, oil on feet.",
        "Meditation before bed.",
        "Warm milk with nutmeg.",
    ),
    entry(
        Dosha::Vata,
        "Anxiety / Panic",
        "Unstable movement of thoughts.",
        "Grounding practices, routine.",
        "Deep breathing (Pranayama).",
        "Root vegetables, soups.",
    ),
    entry(
        Dosha::Vata,
        "Chronic Constipation",
        "Dryness in the colon.",
        "Hydration, fiber-rich diet.",
        "Regular bowel habits.",
        "Triphala, soaked raisins.",
    ),
    entry(
        Dosha::Vata,
        "Bloating & Gas",
        "Air accumulation in the gut.",
        "Eat slowly, chew well.",
        "Vajrasana after meals.",
        "Ginger tea, cumin.",
    ),
    entry(
        Dosha::Vata,
        "Dry Skin Disorders",
        "Lack of moisture in tissues.",
        "Internal and external oleation.",
        "Avoid hot water showers.",
        "Avocado, oils.",
    ),
    entry(
        Dosha::Vata,
        "Lower Back Pain",
        "Vata seat is in the pelvic region.",
        "Correct posture, avoid heavy lifting.",
        "Back strengthening exercises.",
        "Warm soups.",
    ),
    entry(
        Dosha::Vata,
        "Neuropathic Pain",
        "Weakness of the nervous system.",
        "Stress management.",
        "Restorative yoga.",
        "Ashwagandha.",
    ),
    entry(
        Dosha::Vata,
        "Migraine (Vata Type)",
        "Pulsating pain, sensitivity to sound.",
        "Regular meals, avoid triggers.",
        "Head massage.",
        "Sweet, grounding foods.",
    ),
    entry(
        Dosha::Pitta,
        "Gastritis / Acid Reflux",
        "Excess heat in the stomach.",
        "Avoid spicy/fried foods.",
        "Eat on time, don't skip meals.",
        "Coconut water, fennel.",
    ),
    entry(
        Dosha::Pitta,
        "Ulcers (Mouth/Gut)",
        "Inflammation of mucous membranes.",
        "Cooling diet, stress reduction.",
        "Avoid alcohol/smoking.",
        "Aloe vera juice.",
    ),
    entry(
        Dosha::Pitta,
        "Skin Rashes & Hives",
        "Heat manifesting on the skin.",
        "Avoid direct sun.",
        "Cool water baths.",
        "Coriander water.",
    ),
    entry(
        Dosha::Pitta,
        "Acne (Inflammatory)",
        "Toxins and heat in blood.",
        "Face hygiene, blood purification.",
        "Neem paste application.",
        "Bitter greens.",
    ),
    entry(
        Dosha::Pitta,
        "Liver Inflammation",
        "Pitta governs liver function.",
        "Avoid alcohol, anger.",
        "Liver detox.",
        "Turmeric, leafy greens.",
    ),
    entry(
        Dosha::Pitta,
        "Loose Motions",
        "Fast digestion and heat.",
        "Hydration, avoid heat.",
        "Rest.",
        "Pomegranate, buttermilk.",
    ),
    entry(
        Dosha::Pitta,
        "Hypertension (Pitta)",
        "High pressure due to heat/stress.",
        "Relaxation, cooling breath.",
        "Moonlight walks.",
        "Cucumber, melon.",
    ),
    entry(
        Dosha::Pitta,
        "Excessive Sweating",
        "Body trying to release heat.",
        "Wear cotton, stay cool.",
        "Sandalwood paste.",
        "Mint tea.",
    ),
    entry(
        Dosha::Pitta,
        "Inflammatory Headaches",
        "Burning sensation in head.",
        "Wear sunglasses, hat.",
        "Cold compress.",
        "Sweet fruits.",
    ),
    entry(
        Dosha::Pitta,
        "Irritability / Anger",
        "Emotional manifestation of Pitta.",
        "Meditation, patience.",
        "Cooling pranayama (Sheetali).",
        "Sweet, cooling foods.",
    ),
    entry(
        Dosha::Kapha,
        "Obesity / Weight Gain",
        "Accumulation of heavy elements.",
        "Active lifestyle, light diet.",
        "Vigorous exercise.",
        "Spices, honey, barley.",
    ),
    entry(
        Dosha::Kapha,
        "Hypothyroidism",
        "Slow metabolism.",
        "Stimulating activities.",
        "Sun salutations.",
        "Seaweed, iodine rich.",
    ),
    entry(
        Dosha::Kapha,
        "Diabetes (Type-2)",
        "Excess sweetness/heaviness.",
        "Sugar control, movement.",
        "Daily walking.",
        "Bitter gourd, fenugreek.",
    ),
    entry(
        Dosha::Kapha,
        "Sinus Congestion",
        "Mucus accumulation in head.",
        "Keep head warm.",
        "Neti pot, steam.",
        "Ginger, pepper.",
    ),
    entry(
        Dosha::Kapha,
        "Chronic Cough",
        "Excess phlegm in lungs.",
        "Avoid dairy/cold foods.",
        "Chest opening yoga.",
        "Tulsi tea.",
    ),
    entry(
        Dosha::Kapha,
        "Asthma (Kapha)",
        "Obstruction of airways.",
        "Avoid damp places.",
        "Breathing exercises.",
        "Mustard oil massage.",
    ),
    entry(
        Dosha::Kapha,
        "Edema / Retention",
        "Water accumulation.",
        "Reduce salt.",
        "Leg elevation.",
        "Diuretic herbs (Punarnava).",
    ),
    entry(
        Dosha::Kapha,
        "High Cholesterol",
        "Clogging of channels.",
        "Low fat diet.",
        "Cardio.",
        "Garlic, guggul.",
    ),
    entry(
        Dosha::Kapha,
        "Lethargy / Fatigue",
        "Heaviness of mind/body.",
        "Early rising.",
        "New experiences.",
        "Light, spicy foods.",
    ),
    entry(
        Dosha::Kapha,
        "Depression (Kapha)",
        "Stagnation and attachment.",
        "Socializing, activity.",
        "Volunteer work.",
        "Stimulating spices.",
    ),
];
