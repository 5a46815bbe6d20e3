use std::{
    collections::{HashMap, HashSet},
    slice::Iter,
    sync::LazyLock,
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub name_ru: &'static str,
    pub aliases: &'static [&'static str],
    pub category: Category,
    pub muscles: &'static [MuscleGroup],
    pub equipment: Option<Equipment>,
    pub is_bodyweight: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
    FullBody,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 8] = [
            Category::Chest,
            Category::Back,
            Category::Legs,
            Category::Shoulders,
            Category::Arms,
            Category::Core,
            Category::Cardio,
            Category::FullBody,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Legs => "Legs",
            Category::Shoulders => "Shoulders",
            Category::Arms => "Arms",
            Category::Core => "Core",
            Category::Cardio => "Cardio",
            Category::FullBody => "Full Body",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    Pecs,
    Lats,
    Traps,
    FrontDelts,
    SideDelts,
    RearDelts,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    ErectorSpinae,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 16] = [
            MuscleGroup::Pecs,
            MuscleGroup::Lats,
            MuscleGroup::Traps,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
            MuscleGroup::ErectorSpinae,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Pecs => "Pecs",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
            MuscleGroup::ErectorSpinae => "Erector Spinae",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    Machine,
    Cable,
    PullUpBar,
    ParallelBars,
    Bench,
    ResistanceBand,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 9] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::PullUpBar,
            Equipment::ParallelBars,
            Equipment::Bench,
            Equipment::ResistanceBand,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::Bench => "Bench",
            Equipment::ResistanceBand => "Resistance Band",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

pub static EXERCISES: [ExerciseDefinition; 30] = [
    ExerciseDefinition {
        id: "bench-press",
        name: "Bench press",
        name_en: "Bench press",
        name_ru: "Жим лёжа",
        aliases: &["bench", "бенч", "жим лежа", "жим штанги лёжа", "жим штанги лежа"],
        category: Category::Chest,
        muscles: &[MuscleGroup::Pecs, MuscleGroup::FrontDelts, MuscleGroup::Triceps],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "incline-bench-press",
        name: "Incline bench press",
        name_en: "Incline bench press",
        name_ru: "Жим лёжа на наклонной скамье",
        aliases: &["incline bench", "incline press", "наклонный жим"],
        category: Category::Chest,
        muscles: &[MuscleGroup::Pecs, MuscleGroup::FrontDelts, MuscleGroup::Triceps],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "dumbbell-fly",
        name: "Dumbbell fly",
        name_en: "Dumbbell fly",
        name_ru: "Разведение гантелей лёжа",
        aliases: &["flyes", "chest fly", "разводка"],
        category: Category::Chest,
        muscles: &[MuscleGroup::Pecs, MuscleGroup::FrontDelts],
        equipment: Some(Equipment::Dumbbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "push-up",
        name: "Push-up",
        name_en: "Push-up",
        name_ru: "Отжимания",
        aliases: &["pushup", "push up", "push-ups", "отжимания от пола"],
        category: Category::Chest,
        muscles: &[MuscleGroup::Pecs, MuscleGroup::FrontDelts, MuscleGroup::Triceps],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "dip",
        name: "Dip",
        name_en: "Dip",
        name_ru: "Отжимания на брусьях",
        aliases: &["dips", "брусья"],
        category: Category::Chest,
        muscles: &[MuscleGroup::Pecs, MuscleGroup::Triceps, MuscleGroup::FrontDelts],
        equipment: Some(Equipment::ParallelBars),
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "deadlift",
        name: "Deadlift",
        name_en: "Deadlift",
        name_ru: "Становая тяга",
        aliases: &["становая", "дедлифт", "тяга"],
        category: Category::Back,
        muscles: &[MuscleGroup::ErectorSpinae, MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "romanian-deadlift",
        name: "Romanian deadlift",
        name_en: "Romanian deadlift",
        name_ru: "Румынская тяга",
        aliases: &["rdl", "румынка"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::ErectorSpinae],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    // "тяга" is also registered for the deadlift above; the later
    // registration wins, mirroring the declaration order here.
    ExerciseDefinition {
        id: "barbell-row",
        name: "Barbell row",
        name_en: "Barbell row",
        name_ru: "Тяга штанги в наклоне",
        aliases: &["bent over row", "bent-over row", "тяга в наклоне", "тяга"],
        category: Category::Back,
        muscles: &[MuscleGroup::Lats, MuscleGroup::Traps, MuscleGroup::Biceps],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "pull-up",
        name: "Pull-up",
        name_en: "Pull-up",
        name_ru: "Подтягивания",
        aliases: &["pullup", "pull up", "pull-ups", "подтягивания на турнике", "турник"],
        category: Category::Back,
        muscles: &[MuscleGroup::Lats, MuscleGroup::Biceps, MuscleGroup::Forearms],
        equipment: Some(Equipment::PullUpBar),
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "chin-up",
        name: "Chin-up",
        name_en: "Chin-up",
        name_ru: "Подтягивания обратным хватом",
        aliases: &["chinup", "chin up", "chin-ups"],
        category: Category::Back,
        muscles: &[MuscleGroup::Lats, MuscleGroup::Biceps],
        equipment: Some(Equipment::PullUpBar),
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "lat-pulldown",
        name: "Lat pulldown",
        name_en: "Lat pulldown",
        name_ru: "Тяга верхнего блока",
        aliases: &["pulldown", "верхний блок"],
        category: Category::Back,
        muscles: &[MuscleGroup::Lats, MuscleGroup::Biceps],
        equipment: Some(Equipment::Cable),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "cable-row",
        name: "Cable row",
        name_en: "Cable row",
        name_ru: "Тяга нижнего блока",
        aliases: &["seated row", "нижний блок", "тяга блока"],
        category: Category::Back,
        muscles: &[MuscleGroup::Lats, MuscleGroup::Traps, MuscleGroup::Biceps],
        equipment: Some(Equipment::Cable),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "shrug",
        name: "Shrug",
        name_en: "Shrug",
        name_ru: "Шраги",
        aliases: &["shrugs", "шраги со штангой"],
        category: Category::Back,
        muscles: &[MuscleGroup::Traps],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "squat",
        name: "Squat",
        name_en: "Squat",
        name_ru: "Приседания",
        aliases: &["back squat", "присед", "приседания со штангой"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::ErectorSpinae],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "front-squat",
        name: "Front squat",
        name_en: "Front squat",
        name_ru: "Фронтальные приседания",
        aliases: &["фронтальный присед"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "leg-press",
        name: "Leg press",
        name_en: "Leg press",
        name_ru: "Жим ногами",
        aliases: &["жим платформы"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Some(Equipment::Machine),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "leg-extension",
        name: "Leg extension",
        name_en: "Leg extension",
        name_ru: "Разгибания ног",
        aliases: &["разгибания ног в тренажёре"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Quads],
        equipment: Some(Equipment::Machine),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "leg-curl",
        name: "Leg curl",
        name_en: "Leg curl",
        name_ru: "Сгибания ног",
        aliases: &["сгибания ног лёжа"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Hamstrings],
        equipment: Some(Equipment::Machine),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "lunge",
        name: "Lunge",
        name_en: "Lunge",
        name_ru: "Выпады",
        aliases: &["lunges", "выпады с гантелями"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "hip-thrust",
        name: "Hip thrust",
        name_en: "Hip thrust",
        name_ru: "Ягодичный мост",
        aliases: &["glute bridge", "мост"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "calf-raise",
        name: "Calf raise",
        name_en: "Calf raise",
        name_ru: "Подъёмы на носки",
        aliases: &["calf raises", "носки"],
        category: Category::Legs,
        muscles: &[MuscleGroup::Calves],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "overhead-press",
        name: "Overhead press",
        name_en: "Overhead press",
        name_ru: "Жим стоя",
        aliases: &["ohp", "military press", "shoulder press", "армейский жим"],
        category: Category::Shoulders,
        muscles: &[MuscleGroup::FrontDelts, MuscleGroup::SideDelts, MuscleGroup::Triceps],
        equipment: Some(Equipment::Barbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "lateral-raise",
        name: "Lateral raise",
        name_en: "Lateral raise",
        name_ru: "Махи гантелями в стороны",
        aliases: &["side raise", "lateral raises", "махи"],
        category: Category::Shoulders,
        muscles: &[MuscleGroup::SideDelts],
        equipment: Some(Equipment::Dumbbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "face-pull",
        name: "Face pull",
        name_en: "Face pull",
        name_ru: "Тяга к лицу",
        aliases: &["face pulls"],
        category: Category::Shoulders,
        muscles: &[MuscleGroup::RearDelts, MuscleGroup::Traps],
        equipment: Some(Equipment::Cable),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "biceps-curl",
        name: "Biceps curl",
        name_en: "Biceps curl",
        name_ru: "Сгибания рук с гантелями",
        aliases: &["curl", "curls", "dumbbell curl", "бицепс", "подъём на бицепс"],
        category: Category::Arms,
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
        equipment: Some(Equipment::Dumbbell),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "triceps-pushdown",
        name: "Triceps pushdown",
        name_en: "Triceps pushdown",
        name_ru: "Разгибания на блоке",
        aliases: &["pushdown", "трицепс на блоке"],
        category: Category::Arms,
        muscles: &[MuscleGroup::Triceps],
        equipment: Some(Equipment::Cable),
        is_bodyweight: false,
    },
    ExerciseDefinition {
        id: "plank",
        name: "Plank",
        name_en: "Plank",
        name_ru: "Планка",
        aliases: &["планка на локтях"],
        category: Category::Core,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Obliques],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "crunch",
        name: "Crunch",
        name_en: "Crunch",
        name_ru: "Скручивания",
        aliases: &["crunches", "пресс"],
        category: Category::Core,
        muscles: &[MuscleGroup::Abs],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "leg-raise",
        name: "Leg raise",
        name_en: "Leg raise",
        name_ru: "Подъёмы ног",
        aliases: &["leg raises", "подъёмы ног в висе"],
        category: Category::Core,
        muscles: &[MuscleGroup::Abs],
        equipment: None,
        is_bodyweight: true,
    },
    ExerciseDefinition {
        id: "burpee",
        name: "Burpee",
        name_en: "Burpee",
        name_ru: "Бёрпи",
        aliases: &["burpees", "берпи"],
        category: Category::FullBody,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Pecs, MuscleGroup::Abs],
        equipment: None,
        is_bodyweight: true,
    },
];

#[derive(Debug)]
pub struct AliasIndex<'a> {
    keys: Vec<String>,
    by_key: HashMap<String, &'a ExerciseDefinition>,
}

impl<'a> AliasIndex<'a> {
    pub fn build(definitions: &'a [ExerciseDefinition]) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();

        for definition in definitions {
            if !ids.insert(definition.id) {
                return Err(CatalogError::DuplicateId(definition.id));
            }
        }

        let mut keys = Vec::new();
        let mut by_key: HashMap<String, &'a ExerciseDefinition> = HashMap::new();

        for definition in definitions {
            for key in [definition.name, definition.name_en, definition.name_ru]
                .into_iter()
                .chain(definition.aliases.iter().copied())
            {
                let folded = key.to_lowercase();
                if !by_key.contains_key(&folded) {
                    keys.push(folded.clone());
                }
                by_key.insert(folded, definition);
            }
        }

        Ok(Self { keys, by_key })
    }

    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&'a ExerciseDefinition> {
        self.lookup_folded(&text.trim().to_lowercase())
    }

    // Expects input that is already trimmed and case-folded.
    pub(crate) fn lookup_folded(&self, folded: &str) -> Option<&'a ExerciseDefinition> {
        self.by_key.get(folded).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &'a ExerciseDefinition)> {
        self.keys.iter().filter_map(|key| {
            self.by_key
                .get(key)
                .map(|definition| (key.as_str(), *definition))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

static ALIAS_INDEX: LazyLock<AliasIndex<'static>> = LazyLock::new(|| {
    // The builtin catalog is validated exactly once, at first use.
    AliasIndex::build(&EXERCISES).expect("builtin exercise catalog must be well-formed")
});

#[must_use]
pub fn alias_index() -> &'static AliasIndex<'static> {
    &ALIAS_INDEX
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate exercise definition id {0:?}")]
    DuplicateId(&'static str),
}
