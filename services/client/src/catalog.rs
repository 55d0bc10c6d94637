//! Static reference catalog of sample foods
//!
//! Used to attach display attributes when the backend only knows a food by
//! name (favorites) and as an offline fallback for recipe cards.

use serde::Serialize;

/// Cuisine category of a catalog food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Korean,
    Chinese,
    Japanese,
    Western,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Korean,
        Category::Chinese,
        Category::Japanese,
        Category::Western,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Korean => "korean",
            Category::Chinese => "chinese",
            Category::Japanese => "japanese",
            Category::Western => "western",
        }
    }
}

/// Cooking instructions of a catalog food
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub steps: &'static [&'static str],
    pub tips: &'static str,
    pub cooking_time: &'static str,
    pub difficulty: &'static str,
}

/// One catalog entry; nutrition values are per serving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Food {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub ingredients: &'static [&'static str],
    pub recipe: RecipeCard,
}

static FOODS: &[Food] = &[
    Food {
        id: "kimchi-jjigae",
        name: "김치찌개",
        category: Category::Korean,
        calories: 180,
        protein: 12,
        carbs: 15,
        fat: 8,
        image: Some(
            "https://images.unsplash.com/photo-1606491956689-2ea866880c84?w=400&h=300&fit=crop",
        ),
        description: Some(
            "신선한 김치와 돼지고기가 만나 더욱 깊은 맛을 선사하는 대표적인 한국 음식",
        ),
        ingredients: &["김치", "돼지고기", "두부", "대파", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "김치를 적당한 크기로 자른다",
                "돼지고기를 볶는다",
                "김치를 넣고 볶는다",
                "물을 넣고 끓인다",
                "두부와 대파를 넣고 마무리한다",
            ],
            tips: "김치가 신맛이 강할수록 더 맛있다",
            cooking_time: "30분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "bulgogi",
        name: "불고기",
        category: Category::Korean,
        calories: 250,
        protein: 20,
        carbs: 8,
        fat: 15,
        image: Some(
            "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=400&h=300&fit=crop",
        ),
        description: Some(
            "달콤한 양념에 재운 소고기가 부드럽고 감칠맛 나는 한국의 대표 구이 요리",
        ),
        ingredients: &["소고기", "양파", "당근", "간장", "설탕", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "소고기를 얇게 썬다",
                "양념을 만든다",
                "고기를 양념에 재운다",
                "야채를 준비한다",
                "팬에 볶아 완성한다",
            ],
            tips: "고기는 미리 얼려서 썰면 더 얇게 썰 수 있다",
            cooking_time: "45분",
            difficulty: "보통",
        },
    },
    Food {
        id: "perilla-leaf-pickle",
        name: "깻잎장아찌",
        category: Category::Korean,
        calories: 45,
        protein: 3,
        carbs: 8,
        fat: 1,
        image: Some(
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop",
        ),
        description: Some(
            "비타민C, 비타민A, 철분 등 영양으로 가득한 깻잎을 간장으로 절인 건강한 반찬",
        ),
        ingredients: &["깻잎", "간장", "마늘", "생강", "설탕"],
        recipe: RecipeCard {
            steps: &[
                "깻잎을 깨끗이 씻어 물기를 제거한다",
                "간장 양념을 만든다",
                "깻잎을 양념에 재운다",
                "냉장고에서 하루 숙성시킨다",
            ],
            tips: "깻잎은 손질할 때 상하지 않게 조심한다",
            cooking_time: "20분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "cucumber-cold-soup",
        name: "오이냉국",
        category: Category::Korean,
        calories: 25,
        protein: 1,
        carbs: 6,
        fat: 0,
        image: Some(
            "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400&h=300&fit=crop",
        ),
        description: Some(
            "아삭아삭한 오이와 새콤달콤한 냉국의 조화로 여름철 시원함을 선사하는 전통 국물 요리",
        ),
        ingredients: &["오이", "식초", "설탕", "소금", "찬물"],
        recipe: RecipeCard {
            steps: &[
                "오이를 적당한 크기로 자른다",
                "냉국 양념을 만든다",
                "오이를 양념에 넣는다",
                "찬물을 부어 완성한다",
            ],
            tips: "오이는 너무 얇게 자르지 않는다",
            cooking_time: "15분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "beef-skewers",
        name: "쇠고기산적",
        category: Category::Korean,
        calories: 280,
        protein: 25,
        carbs: 12,
        fat: 15,
        image: Some(
            "https://images.unsplash.com/photo-1529042410759-befb1204b468?w=400&h=300&fit=crop",
        ),
        description: Some(
            "고기와 버섯이 잘 어우러져 질리지 않는 맛으로 남녀노소 모두 좋아하는 꼬치 요리",
        ),
        ingredients: &["쇠고기", "버섯", "양파", "간장", "설탕", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "쇠고기와 야채를 적당한 크기로 자른다",
                "양념을 만든다",
                "재료를 꼬치에 꽂는다",
                "양념을 발라 구운다",
            ],
            tips: "꼬치에 꽂을 때는 간격을 일정하게 한다",
            cooking_time: "40분",
            difficulty: "보통",
        },
    },
    Food {
        id: "beef-mushroom-stirfry",
        name: "쇠고기양송이볶음",
        category: Category::Korean,
        calories: 220,
        protein: 22,
        carbs: 10,
        fat: 12,
        image: Some(
            "https://images.unsplash.com/photo-1512058564366-18510be2db19?w=400&h=300&fit=crop",
        ),
        description: Some(
            "쫄깃하고 부드러운 쇠고기와 양송이의 만남이 일품인 영양 가득한 볶음 요리",
        ),
        ingredients: &["쇠고기", "양송이", "양파", "간장", "설탕", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "쇠고기와 양송이를 준비한다",
                "양념을 만든다",
                "쇠고기를 먼저 볶는다",
                "양송이를 넣고 함께 볶는다",
            ],
            tips: "양송이는 너무 오래 볶지 않는다",
            cooking_time: "25분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "braised-burdock",
        name: "우엉조림",
        category: Category::Korean,
        calories: 85,
        protein: 2,
        carbs: 18,
        fat: 2,
        image: Some(
            "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=400&h=300&fit=crop",
        ),
        description: Some("아삭한 우엉을 맛깔스러운 양념으로 조려낸 영양만점의 전통 반찬"),
        ingredients: &["우엉", "간장", "설탕", "참기름", "깨"],
        recipe: RecipeCard {
            steps: &[
                "우엉을 껍질을 벗기고 씻는다",
                "우엉을 적당한 크기로 자른다",
                "양념을 만든다",
                "우엉을 양념에 조린다",
            ],
            tips: "우엉은 식초물에 담가두면 색이 변하지 않는다",
            cooking_time: "35분",
            difficulty: "보통",
        },
    },
    Food {
        id: "stirfried-anchovies",
        name: "멸치볶음",
        category: Category::Korean,
        calories: 120,
        protein: 15,
        carbs: 8,
        fat: 3,
        image: Some(
            "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400&h=300&fit=crop",
        ),
        description: Some("고소하고 짭짤한 맛으로 밥 한 공기 뚝딱 해치우게 만드는 대표적인 밑반찬"),
        ingredients: &["멸치", "간장", "설탕", "마늘", "생강"],
        recipe: RecipeCard {
            steps: &[
                "멸치를 깨끗이 씻는다",
                "양념을 만든다",
                "멸치를 볶는다",
                "양념을 넣고 볶아 완성한다",
            ],
            tips: "멸치는 머리와 내장을 제거한다",
            cooking_time: "20분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "braised-mackerel-radish",
        name: "갈치무조림",
        category: Category::Korean,
        calories: 200,
        protein: 20,
        carbs: 15,
        fat: 8,
        image: Some(
            "https://images.unsplash.com/photo-1529042410759-befb1204b468?w=400&h=300&fit=crop",
        ),
        description: Some("구이가 지겨울 때 조림으로 즐기는 갈치와 무의 완벽한 조화"),
        ingredients: &["갈치", "무", "간장", "설탕", "고춧가루", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "갈치를 토막내어 준비한다",
                "무를 적당한 크기로 자른다",
                "양념을 만든다",
                "갈치와 무를 양념에 조린다",
            ],
            tips: "갈치는 미리 소금에 절여두면 비린내가 줄어든다",
            cooking_time: "50분",
            difficulty: "보통",
        },
    },
    Food {
        id: "chicken-bulgogi",
        name: "닭불고기",
        category: Category::Korean,
        calories: 180,
        protein: 18,
        carbs: 12,
        fat: 6,
        image: Some(
            "https://images.unsplash.com/photo-1512058564366-18510be2db19?w=400&h=300&fit=crop",
        ),
        description: Some(
            "닭고기로 만든 불고기로 부드럽고 달콤한 간장 양념이 일품인 건강한 구이 요리",
        ),
        ingredients: &["닭고기", "양파", "당근", "간장", "설탕", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "닭고기를 적당한 크기로 자른다",
                "양념을 만든다",
                "닭고기를 양념에 재운다",
                "팬에 볶아 완성한다",
            ],
            tips: "닭고기는 너무 오래 볶으면 질겨진다",
            cooking_time: "30분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "kung-pao-chicken",
        name: "궁보계정",
        category: Category::Chinese,
        calories: 320,
        protein: 25,
        carbs: 20,
        fat: 18,
        image: None,
        description: None,
        ingredients: &["닭고기", "땅콩", "건고추", "양파", "마늘", "생강"],
        recipe: RecipeCard {
            steps: &[
                "닭고기를 다진다",
                "양념을 만든다",
                "닭고기를 볶는다",
                "야채를 넣고 볶는다",
                "땅콩을 넣고 마무리한다",
            ],
            tips: "땅콩은 마지막에 넣어야 바삭함을 유지한다",
            cooking_time: "25분",
            difficulty: "보통",
        },
    },
    Food {
        id: "teriyaki-salmon",
        name: "데리야키 연어",
        category: Category::Japanese,
        calories: 280,
        protein: 22,
        carbs: 12,
        fat: 16,
        image: None,
        description: None,
        ingredients: &["연어", "간장", "미림", "설탕", "생강"],
        recipe: RecipeCard {
            steps: &[
                "연어를 준비한다",
                "데리야키 소스를 만든다",
                "연어를 구운다",
                "소스를 발라 완성한다",
            ],
            tips: "연어는 너무 오래 구우면 퍽퍽해진다",
            cooking_time: "20분",
            difficulty: "쉬움",
        },
    },
    Food {
        id: "grilled-chicken",
        name: "그릴 치킨",
        category: Category::Western,
        calories: 220,
        protein: 28,
        carbs: 5,
        fat: 10,
        image: None,
        description: None,
        ingredients: &["닭가슴살", "올리브오일", "레몬", "로즈마리", "마늘"],
        recipe: RecipeCard {
            steps: &[
                "닭가슴살을 준비한다",
                "양념을 만든다",
                "닭고기를 재운다",
                "그릴에서 구운다",
                "레몬을 곁들여 완성한다",
            ],
            tips: "닭가슴살은 미리 두드려주면 더 부드럽다",
            cooking_time: "35분",
            difficulty: "쉬움",
        },
    },
];

/// Every catalog food, grouped by category in catalog order
pub fn all_foods() -> &'static [Food] {
    FOODS
}

/// Foods of one category
pub fn foods_by_category(category: Category) -> impl Iterator<Item = &'static Food> {
    FOODS.iter().filter(move |food| food.category == category)
}

/// Look a food up by its slug id
pub fn food_by_id(id: &str) -> Option<&'static Food> {
    FOODS.iter().find(|food| food.id == id)
}

/// Look a food up by its display name (exact match)
pub fn food_by_name(name: &str) -> Option<&'static Food> {
    FOODS.iter().find(|food| food.name == name)
}
