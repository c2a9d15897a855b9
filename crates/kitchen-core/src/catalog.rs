//! The built-in catalog seeded into a fresh recipe table.
//!
//! Every entry is a default recipe: it is written once on first run and can
//! never be deleted. Ids are fixed so that they stay stable across installs.

use crate::recipe::{Category, Recipe, RecipeId};

/// One built-in recipe, stored as static text.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
  pub id:          RecipeId,
  pub name:        &'static str,
  pub category:    Category,
  pub ingredients: &'static str,
  pub steps:       &'static str,
}

impl CatalogEntry {
  /// Materialise the entry as a default [`Recipe`].
  pub fn to_recipe(&self) -> Recipe {
    Recipe {
      id:          self.id,
      name:        self.name.to_owned(),
      category:    self.category,
      ingredients: self.ingredients.to_owned(),
      steps:       self.steps.to_owned(),
      video_path:  None,
      is_default:  true,
    }
  }
}

/// All built-in recipes as owned rows, in id order.
pub fn builtin_recipes() -> Vec<Recipe> {
  BUILTIN_RECIPES.iter().map(CatalogEntry::to_recipe).collect()
}

#[rustfmt::skip]
pub const BUILTIN_RECIPES: &[CatalogEntry] = &[
  CatalogEntry {
    id:          1,
    name:        "Pani Puri",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\nFOR PURI:\n1 cup semolina (sooji)\n2 tbsp all-purpose flour\nSalt to taste\nWater as needed\nOil for frying\n\nFOR PANI:\n1 cup mint leaves\n1/2 cup coriander leaves\n1 green chilli\n1-inch ginger\n1 tbsp tamarind pulp\n1 tsp cumin powder\nSalt to taste\n4 cups cold water\n\nFOR FILLING:\n2 boiled potatoes, mashed\n1/2 cup boiled chickpeas\nChaat masala, to taste",
    steps:       "•Mix semolina, flour, salt, and water to form a stiff dough. Rest 20 minutes.\n•Roll small puris and fry till crisp and puffed.\n•Blend mint, coriander, chilli, ginger, tamarind, cumin, and salt with water to make spiced pani.\n•Mix potatoes, chickpeas, and chaat masala for filling.\n•Crack puris, fill with stuffing, and pour pani before serving.",
  },
  CatalogEntry {
    id:          2,
    name:        "Channa Masala",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup chickpeas (soaked overnight)\n2 onions, chopped\n2 tomatoes, chopped\n1 tbsp ginger-garlic paste\n1 tsp cumin\n1 tsp coriander powder\n1/2 tsp turmeric\n1 tsp garam masala\n1/2 tsp chilli powder\n2 tbsp oil\nSalt to taste\nFresh coriander for garnish",
    steps:       "•Pressure cook soaked chickpeas until soft.\n•Heat oil in a pan, add cumin and sauté onions till golden.\n•Add ginger-garlic paste and cook for a minute.\n•Add tomatoes and all spices, cook till oil separates.\n•Add cooked chickpeas and simmer for 10 minutes.\n•Garnish with coriander and serve with rice or roti.",
  },
  CatalogEntry {
    id:          3,
    name:        "Bisi Bele Bath",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup rice\n1/2 cup toor dal\n1/2 cup mixed vegetables\n2 tbsp bisi bele bath powder\nTamarind pulp (small lemon size)\n2 tbsp ghee\nSalt to taste\nCurry leaves, mustard seeds, cashews for tempering",
    steps:       "•Cook rice and dal separately until soft.\n•Boil vegetables with tamarind pulp and salt.\n•Add cooked rice and dal, mix well.\n•Stir in bisi bele bath powder and simmer for 5 minutes.\n•In a small pan, heat ghee and add mustard seeds, curry leaves, and cashews.\n•Pour tempering over the rice mixture and serve hot.",
  },
  CatalogEntry {
    id:          4,
    name:        "Papdi Chaat",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n12 papdis (crispy wafers)\n1/2 cup boiled potatoes, cubed\n1/2 cup boiled chickpeas\n1/2 cup yogurt, whisked\n2 tbsp tamarind chutney\n2 tbsp green chutney\nChaat masala, red chilli powder, and salt to taste\nCoriander leaves for garnish",
    steps:       "•Arrange papdis on a plate.\n•Top each with potatoes and chickpeas.\n•Drizzle yogurt, green chutney, and tamarind chutney.\n•Sprinkle chaat masala, chilli powder, and salt.\n•Garnish with coriander leaves and serve immediately.",
  },
  CatalogEntry {
    id:          5,
    name:        "Masala Dosa",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n2 cups dosa batter\n2 boiled potatoes, mashed\n1 onion, sliced\n1 green chilli, chopped\n1/2 tsp mustard seeds\n1/4 tsp turmeric\nSalt to taste\nOil for cooking",
    steps:       "•Heat oil in a pan and add mustard seeds.\n•Add onions, green chilli, turmeric, and sauté till soft.\n•Add mashed potatoes and salt; mix well.\n•Spread dosa batter on a hot tawa.\n•Drizzle oil around edges, cook till crisp.\n•Place filling in the center, fold, and serve hot with chutney and sambar.",
  },
  CatalogEntry {
    id:          6,
    name:        "Dal Makhni",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup whole black lentils (urad dal)\n1/4 cup kidney beans (rajma)\n2 onions, chopped\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1 tsp cumin\n1/2 tsp garam masala\n1/2 tsp chilli powder\n2 tbsp butter\n1/4 cup cream\nSalt to taste",
    steps:       "•Soak dal and rajma overnight, pressure cook until soft.\n•In a pan, heat butter and sauté cumin, onions, and ginger-garlic paste.\n•Add tomato puree, spices, and cook until oil separates.\n•Add cooked lentils, mash slightly, and simmer for 30 minutes.\n•Stir in cream, garnish with butter, and serve.",
  },
  CatalogEntry {
    id:          7,
    name:        "Pav Bhaji",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n2 tbsp butter\n1 onion, chopped\n1 tomato, chopped\n1/2 cup boiled peas\n2 boiled potatoes, mashed\n1/2 cup capsicum, chopped\n1 tsp pav bhaji masala\n1/2 tsp chilli powder\nSalt to taste\nPav buns\nLemon wedges and coriander for garnish",
    steps:       "•Heat butter in a pan, sauté onion till translucent.\n•Add tomato and cook till soft.\n•Add capsicum, peas, and mashed potatoes.\n•Add pav bhaji masala, chilli powder, and salt.\n•Mash with a masher and simmer for 5 minutes.\n•Toast pav buns with butter.\n•Serve bhaji hot with buns, lemon, and coriander.",
  },
  CatalogEntry {
    id:          8,
    name:        "Paneer Butter Masala",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n200g paneer, cubed\n2 onions, chopped\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1/2 tsp garam masala\n1/2 tsp chilli powder\n1/4 cup cream\n1 tbsp butter\n1 tbsp oil\nSalt to taste\n1 tsp kasuri methi",
    steps:       "•Heat butter and oil in a pan.\n•Sauté onions until golden, add ginger-garlic paste.\n•Add tomato puree and cook till oil separates.\n•Stir in chilli powder, garam masala, and salt.\n•Add paneer cubes and simmer 5 minutes.\n•Add cream and kasuri methi, mix gently.\n•Serve hot with naan or rice.",
  },
  CatalogEntry {
    id:          9,
    name:        "Tomato Chutney",
    category:    Category::Vegetarian,
    ingredients: "1 cup:\n3 ripe tomatoes, chopped\n2 dried red chillies\n1 tsp mustard seeds\n2 garlic cloves\n1 tbsp oil\nSalt to taste\nFew curry leaves",
    steps:       "•Heat oil in a pan, add mustard seeds and curry leaves.\n•Add chillies, garlic, and tomatoes.\n•Cook until tomatoes turn mushy.\n•Cool and blend into a smooth paste.\n•Serve with idli, dosa, or vada.",
  },
  CatalogEntry {
    id:          10,
    name:        "Veg Hakka Noodles",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n150g noodles\n1 tbsp oil\n1 clove garlic, minced\n1 onion, sliced\n1/2 cup carrot, capsicum, and cabbage, julienned\n1 tbsp soy sauce\n1 tsp vinegar\n1/2 tsp pepper\nSalt to taste\nSpring onions for garnish",
    steps:       "•Boil noodles, drain, and toss with oil.\n•Heat oil in a wok, sauté garlic and onion.\n•Add vegetables and stir-fry on high flame.\n•Add soy sauce, vinegar, salt, and pepper.\n•Add noodles and toss well.\n•Garnish with spring onions and serve.",
  },
  CatalogEntry {
    id:          11,
    name:        "Malai Kofta",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\nFOR KOFTA:\n2 boiled potatoes\n1/2 cup grated paneer\n2 tbsp corn flour\nSalt to taste\nOil for frying\n\nFOR GRAVY:\n2 onions, chopped\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1/2 tsp garam masala\n1/4 cup cream\n1 tbsp butter\n1 tsp chilli powder\nSalt to taste",
    steps:       "•Mix potatoes, paneer, corn flour, and salt; shape into balls and deep fry till golden.\n•Heat butter, sauté onions and ginger-garlic paste.\n•Add tomato puree, spices, and salt; cook till oil separates.\n•Add cream and mix well.\n•Add koftas just before serving and garnish with cream.",
  },
  CatalogEntry {
    id:          12,
    name:        "Khichdi",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1/2 cup rice\n1/4 cup moong dal\n1 onion, chopped\n1 tomato, chopped\n1/2 tsp cumin\n1/4 tsp turmeric\nSalt to taste\n1 tbsp ghee\n3 cups water",
    steps:       "•Wash rice and dal, soak for 15 minutes.\n•Heat ghee in a pressure cooker, add cumin, onions, and sauté.\n•Add tomatoes, turmeric, and salt.\n•Add rice, dal, and water.\n•Pressure cook for 3 whistles.\n•Serve with ghee and papad.",
  },
  CatalogEntry {
    id:          13,
    name:        "Veg Fried Rice",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n2 cups cooked rice\n1 tbsp oil\n1 garlic clove, minced\n1/2 cup chopped vegetables (carrot, beans, peas, capsicum)\n1 tbsp soy sauce\n1/2 tsp pepper\nSalt to taste\nSpring onions for garnish",
    steps:       "•Heat oil in a wok and sauté garlic.\n•Add vegetables and stir-fry 2–3 minutes.\n•Add soy sauce, salt, and pepper.\n•Add cooked rice and toss on high flame.\n•Garnish with spring onions and serve.",
  },
  CatalogEntry {
    id:          14,
    name:        "Aloo Chaat",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n2 boiled potatoes, cubed\n1 tbsp oil\n1/2 tsp chaat masala\n1/4 tsp chilli powder\nSalt to taste\n1 tbsp lemon juice\nChopped coriander for garnish",
    steps:       "•Heat oil in a pan and shallow-fry potatoes until crisp.\n•Add chaat masala, chilli powder, and salt.\n•Mix well and drizzle with lemon juice.\n•Garnish with coriander and serve hot.",
  },
  CatalogEntry {
    id:          15,
    name:        "Pulihora",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n2 cups cooked rice\n2 tbsp tamarind pulp\n1 tbsp sesame oil\n1/2 tsp mustard seeds\n1 dried red chilli\nFew curry leaves\n1 tbsp peanuts\nSalt to taste",
    steps:       "•Heat oil in a pan, add mustard seeds, red chilli, curry leaves, and peanuts.\n•Add tamarind pulp and cook until thickened.\n•Add salt and mix with cooked rice.\n•Toss well and serve.",
  },
  CatalogEntry {
    id:          16,
    name:        "Mirchi Bajjii",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n6 large green chillies\n1 cup gram flour\n1/4 tsp turmeric\n1/2 tsp chilli powder\nSalt to taste\nWater as needed\nOil for frying",
    steps:       "•Slit chillies and remove seeds if desired.\n•Mix gram flour, spices, and water into a smooth batter.\n•Dip each chilli into the batter and deep fry until golden.\n•Serve with chutney.",
  },
  CatalogEntry {
    id:          17,
    name:        "Pesarattu",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup green gram (moong dal)\n1-inch ginger\n2 green chillies\nSalt to taste\nOil for cooking",
    steps:       "•Soak green gram overnight and grind with ginger, chillies, and salt into a smooth batter.\n•Pour batter on a hot tawa and spread thinly.\n•Drizzle oil around edges and cook till crisp.\n•Fold and serve with upma or chutney.",
  },
  CatalogEntry {
    id:          18,
    name:        "Khandvi",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup gram flour\n1 cup yogurt\n2 cups water\n1/2 tsp turmeric\nSalt to taste\n1 tsp mustard seeds\nCurry leaves\nGrated coconut for garnish",
    steps:       "•Whisk gram flour, yogurt, water, turmeric, and salt until smooth.\n•Cook on low flame, stirring till thick.\n•Spread thin layer on a greased surface and roll when cool.\n•Heat oil, add mustard seeds and curry leaves; pour over rolls.\n•Garnish with coconut.",
  },
  CatalogEntry {
    id:          19,
    name:        "Garlic Cheese Toast",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n4 bread slices\n2 tbsp butter\n2 garlic cloves, minced\n1/2 cup grated cheese\n1 tsp parsley",
    steps:       "•Mix butter and garlic, spread on bread slices.\n•Sprinkle cheese and parsley.\n•Toast in oven or pan till golden and cheese melts.\n•Serve hot.",
  },
  CatalogEntry {
    id:          20,
    name:        "Veg Momos",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n1 cup all-purpose flour\n1/2 cup chopped vegetables (cabbage, carrot, capsicum)\n1 tsp soy sauce\n1 tsp oil\nSalt to taste\nWater for dough",
    steps:       "•Knead flour and water into soft dough.\n•Sauté vegetables with soy sauce and salt.\n•Roll small dough circles, fill with mixture, and shape momos.\n•Steam for 10 minutes and serve with chutney.",
  },
  CatalogEntry {
    id:          21,
    name:        "Paneer 65",
    category:    Category::Vegetarian,
    ingredients: "4 servings:\n200g paneer, cubed\n2 tbsp corn flour\n1 tbsp rice flour\n1 tsp chilli powder\n1/4 tsp turmeric\nSalt to taste\nOil for frying\nCurry leaves and green chillies for garnish",
    steps:       "•Mix flours, spices, and salt with water to make batter.\n•Coat paneer cubes and deep fry till crisp.\n•Toss with fried curry leaves and chillies.\n•Serve hot as snack.",
  },
  CatalogEntry {
    id:          22,
    name:        "Honey Chilli Potato",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n2 potatoes, cut into fingers\n2 tbsp corn flour\n1 tbsp soy sauce\n1 tbsp tomato ketchup\n1 tbsp honey\n1/2 tsp chilli flakes\n1 tbsp oil\nSesame seeds for garnish",
    steps:       "•Coat potato fingers with corn flour and deep fry till golden.\n•In a wok, heat oil, add soy sauce, ketchup, honey, and chilli flakes.\n•Add fried potatoes and toss well.\n•Garnish with sesame seeds and serve.",
  },
  CatalogEntry {
    id:          23,
    name:        "Veg Taco Skillet",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n1 tbsp oil\n1 onion, chopped\n1 bell pepper, chopped\n1 cup cooked beans\n1/2 cup corn\n1 tbsp taco seasoning\n1/2 cup cheese\nTortilla chips for serving",
    steps:       "•Heat oil in a pan and sauté onions and bell pepper.\n•Add beans, corn, and taco seasoning.\n•Simmer for 5 minutes.\n•Top with cheese and cover till melted.\n•Serve with tortilla chips.",
  },
  CatalogEntry {
    id:          24,
    name:        "Creamy Tomato Spaghetti",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n150g spaghetti\n1 tbsp olive oil\n2 garlic cloves\n2 tomatoes, pureed\n1/4 cup cream\nSalt and pepper to taste\nBasil leaves for garnish",
    steps:       "•Cook spaghetti as per packet instructions.\n•Heat oil, sauté garlic, and add tomato puree.\n•Simmer 5 minutes, add cream, salt, and pepper.\n•Toss in spaghetti and garnish with basil.",
  },
  CatalogEntry {
    id:          25,
    name:        "Mushroom and Spinach Pasta",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n150g pasta\n1 tbsp olive oil\n1 cup mushrooms, sliced\n1 cup spinach\n1/2 cup cream\nSalt and pepper to taste\nGrated cheese for garnish",
    steps:       "•Cook pasta until al dente.\n•Heat oil and sauté mushrooms till brown.\n•Add spinach and cook till wilted.\n•Add cream, salt, and pepper.\n•Mix in pasta, toss well, and garnish with cheese.",
  },
  CatalogEntry {
    id:          26,
    name:        "Vegetarian Miso Noodle Soup with Mushrooms",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n4 cups vegetable broth\n1 tbsp miso paste\n1 cup mushrooms\n100g noodles\n1 tbsp soy sauce\n1 tsp sesame oil\nSpring onions for garnish",
    steps:       "•Heat broth in a pot, add miso paste and stir until dissolved.\n•Add mushrooms and soy sauce, simmer 5 minutes.\n•Add noodles and cook till soft.\n•Drizzle sesame oil and garnish with spring onions.",
  },
  CatalogEntry {
    id:          27,
    name:        "Mediterranean Lentil Salad with Feta",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n1 cup cooked lentils\n1/2 cup cherry tomatoes\n1/4 cup cucumber, diced\n1/4 cup red onion, chopped\n2 tbsp olive oil\n1 tbsp lemon juice\n1/4 cup feta cheese\nSalt and pepper to taste",
    steps:       "•Combine lentils, tomatoes, cucumber, and onion in a bowl.\n•Whisk olive oil, lemon juice, salt, and pepper.\n•Toss dressing with salad and top with feta.",
  },
  CatalogEntry {
    id:          28,
    name:        "Black Bean Burritos",
    category:    Category::Vegetarian,
    ingredients: "2 servings:\n4 tortillas\n1 cup cooked black beans\n1/2 cup cooked rice\n1/2 cup corn\n1/2 cup salsa\n1/4 cup cheese\nLettuce and sour cream to serve",
    steps:       "•Warm tortillas slightly.\n•Mix beans, rice, corn, salsa, and cheese.\n•Place mixture in center of tortilla, roll tightly.\n•Serve with lettuce and sour cream.",
  },
  CatalogEntry {
    id:          29,
    name:        "Egg Curry",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n6 boiled eggs\n2 onions, finely chopped\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1 tsp cumin seeds\n1/2 tsp turmeric\n1 tsp coriander powder\n1/2 tsp chilli powder\n1/2 tsp garam masala\n2 tbsp oil\nSalt to taste\nFresh coriander for garnish",
    steps:       "•Heat oil in a pan and add cumin seeds.\n•Add onions and sauté until golden brown.\n•Stir in ginger-garlic paste and cook for a minute.\n•Add tomato puree, turmeric, coriander powder, and chilli powder.\n•Cook until oil separates.\n•Add 1/2 cup water and bring to a boil.\n•Add boiled eggs (halved) and simmer for 5 minutes.\n•Sprinkle garam masala, garnish with coriander, and serve hot.",
  },
  CatalogEntry {
    id:          30,
    name:        "Vegetable Egg Fried Rice",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 cups cooked rice\n2 eggs, lightly beaten\n1 tbsp oil\n1 garlic clove, minced\n1/2 cup mixed vegetables (carrot, beans, peas, corn)\n1 tbsp soy sauce\n1 tsp vinegar\nSalt and pepper to taste\nSpring onions for garnish",
    steps:       "•Heat oil in a wok and add garlic.\n•Add beaten eggs, scramble lightly, and cook until soft.\n•Add vegetables and stir-fry 2–3 minutes.\n•Add rice, soy sauce, vinegar, salt, and pepper.\n•Toss everything on high heat.\n•Garnish with spring onions and serve.",
  },
  CatalogEntry {
    id:          31,
    name:        "Spinach and Mushroom Omelette",
    category:    Category::EggEtarian,
    ingredients: "1 serving:\n2 eggs\n1/2 cup spinach, chopped\n1/4 cup mushrooms, sliced\n1 tbsp milk\n1 tbsp butter\nSalt and pepper to taste\nGrated cheese (optional)",
    steps:       "•Beat eggs with milk, salt, and pepper.\n•Heat butter in a non-stick pan and sauté mushrooms and spinach for 2 minutes.\n•Pour egg mixture and cook on medium heat.\n•Add cheese if desired.\n•Fold and serve hot.",
  },
  CatalogEntry {
    id:          32,
    name:        "Egg Bhurji",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n3 eggs\n1 onion, chopped\n1 tomato, chopped\n1 green chilli, chopped\n1/4 tsp turmeric\n1/2 tsp chilli powder\nSalt to taste\n1 tbsp oil\nCoriander leaves for garnish",
    steps:       "•Heat oil in a pan and add onions and green chilli.\n•Sauté till onions soften.\n•Add tomatoes, turmeric, and chilli powder.\n•Cook till tomatoes turn mushy.\n•Add beaten eggs and cook while stirring continuously.\n•Garnish with coriander and serve with bread or roti.",
  },
  CatalogEntry {
    id:          33,
    name:        "Egg Sandwich",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 slices of bread\n2 boiled eggs, chopped\n2 tbsp mayonnaise\n1 tsp mustard\nSalt and pepper to taste\nButter for toasting",
    steps:       "•Mix chopped eggs, mayonnaise, mustard, salt, and pepper in a bowl.\n•Spread mixture between two bread slices.\n•Butter outer sides and toast on a pan until golden brown.\n•Serve warm or cold.",
  },
  CatalogEntry {
    id:          34,
    name:        "Shakshuka",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 tbsp olive oil\n1 onion, chopped\n2 cloves garlic, minced\n1 red bell pepper, diced\n4 tomatoes, chopped (or 1 can crushed tomatoes)\n1 tsp cumin\n1/2 tsp paprika\n1/2 tsp chilli powder\n4 eggs\nSalt and pepper to taste\nFresh parsley for garnish",
    steps:       "•Heat olive oil in a pan and sauté onion and garlic until fragrant.\n•Add bell pepper and cook until soft.\n•Add tomatoes and spices, simmer until thickened.\n•Make small wells and crack eggs into them.\n•Cover and cook until eggs are set to your liking.\n•Garnish with parsley and serve with bread.",
  },
  CatalogEntry {
    id:          35,
    name:        "Egg Dosa",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 cup dosa batter\n2 eggs\n1 onion, finely chopped\n1 green chilli, chopped\nSalt and pepper to taste\nOil for cooking",
    steps:       "•Heat tawa and spread dosa batter thinly.\n•Break one egg on top, spread evenly, and sprinkle onion, chilli, salt, and pepper.\n•Drizzle oil around edges and cook until golden.\n•Fold and serve with chutney or sambar.",
  },
  CatalogEntry {
    id:          36,
    name:        "Egg Paratha",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 cups wheat flour\n2 eggs\n1 onion, chopped\n1 green chilli, chopped\nSalt and pepper to taste\nOil or ghee for roasting",
    steps:       "•Knead flour with water to form dough, rest for 15 minutes.\n•Roll into a circle and cook lightly on a tawa.\n•Crack an egg on top, spread with spoon, sprinkle onion, chilli, salt, and pepper.\n•Flip and cook both sides with oil until golden.\n•Serve hot with yogurt or pickle.",
  },
  CatalogEntry {
    id:          37,
    name:        "Egg Fried Noodles",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n150g noodles\n2 eggs\n1 tbsp oil\n1 garlic clove, minced\n1/2 cup mixed vegetables (capsicum, carrot, beans)\n1 tbsp soy sauce\n1/2 tsp pepper\nSalt to taste\nSpring onions for garnish",
    steps:       "•Cook noodles and drain.\n•Heat oil, add garlic and vegetables, stir-fry for 2 minutes.\n•Push to one side, scramble eggs on the other.\n•Add noodles, soy sauce, salt, and pepper.\n•Toss well, garnish with spring onions.",
  },
  CatalogEntry {
    id:          38,
    name:        "Egg Biryani",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n4 boiled eggs\n1 1/2 cups basmati rice\n2 onions, sliced\n1 tomato, chopped\n1 tbsp ginger-garlic paste\n1 tsp garam masala\n1/2 tsp turmeric\n1/2 tsp chilli powder\n2 tbsp oil\n1 tbsp ghee\nFresh coriander and mint\nSalt to taste",
    steps:       "•Cook rice until 90% done, drain and keep aside.\n•Heat oil, sauté onions until golden.\n•Add ginger-garlic paste, tomato, and spices.\n•Add boiled eggs and mix gently.\n•Layer rice over masala, sprinkle mint and coriander.\n•Cover and steam for 10 minutes.\n•Serve hot with raita.",
  },
  CatalogEntry {
    id:          39,
    name:        "Spanish Omelette",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n3 eggs\n1 potato, thinly sliced\n1 onion, sliced\n2 tbsp olive oil\nSalt and pepper to taste",
    steps:       "•Heat olive oil in a pan and cook potato slices till soft.\n•Add onions and cook until translucent.\n•Beat eggs with salt and pepper, pour over potatoes.\n•Cook on low flame until set.\n•Flip carefully and cook the other side.\n•Serve warm.",
  },
  CatalogEntry {
    id:          40,
    name:        "Egg Pasta Carbonara (Vegetarian)",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n150g spaghetti\n2 eggs\n1/4 cup grated parmesan or vegetarian cheese\n1 tbsp olive oil\n2 cloves garlic, minced\nSalt and pepper to taste\nParsley for garnish",
    steps:       "•Cook spaghetti al dente, reserve 1/4 cup pasta water.\n•Beat eggs with cheese, salt, and pepper.\n•Heat oil, sauté garlic, add cooked pasta.\n•Turn off heat, quickly stir in egg mixture with a splash of hot pasta water.\n•Toss well till creamy.\n•Garnish with parsley.",
  },
  CatalogEntry {
    id:          41,
    name:        "Egg Curry Rice Bowl",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 boiled eggs\n1 cup cooked rice\n1/2 cup curry sauce (any mild curry)\n1 tbsp oil\nSalt to taste\nCoriander for garnish",
    steps:       "•Heat curry sauce in a pan.\n•Add boiled eggs and simmer for 5 minutes.\n•Serve hot over steamed rice.\n•Garnish with coriander.",
  },
  CatalogEntry {
    id:          42,
    name:        "Masala Egg Toast",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 slices bread\n2 eggs\n1 small onion, chopped\n1 green chilli, chopped\n1 tbsp milk\nSalt and pepper to taste\nButter or oil for toasting",
    steps:       "•Beat eggs with onion, chilli, milk, salt, and pepper.\n•Heat butter on a pan, dip each bread slice in the mixture.\n•Cook both sides till golden.\n•Serve hot with ketchup or chutney.",
  },
  CatalogEntry {
    id:          43,
    name:        "Egg Manchurian",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 boiled eggs (halved)\n1/4 cup corn flour\n2 tbsp soy sauce\n1 tbsp tomato ketchup\n1 tsp vinegar\n1 onion, chopped\n1 capsicum, chopped\n1 tbsp oil\nSalt and pepper to taste",
    steps:       "•Coat egg halves in corn flour, shallow fry till golden.\n•In the same pan, sauté onion and capsicum.\n•Add sauces, vinegar, and pepper.\n•Add eggs, toss gently.\n•Serve as snack or with fried rice.",
  },
  CatalogEntry {
    id:          44,
    name:        "Vegetable Egg Wrap",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 eggs\n2 chapatis or tortillas\n1/2 cup grated carrot\n1/4 cup sliced cucumber\n1/4 cup lettuce\n1 tbsp mayonnaise or yogurt sauce\nSalt and pepper to taste",
    steps:       "•Beat eggs and cook into thin omelettes.\n•Place omelette over chapati.\n•Add vegetables and sauce, sprinkle salt and pepper.\n•Roll tightly and serve.",
  },
  CatalogEntry {
    id:          45,
    name:        "Egg Pakora",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n4 boiled eggs, halved\n1 cup gram flour\n1/2 tsp turmeric\n1/2 tsp chilli powder\nSalt to taste\nWater as needed\nOil for frying",
    steps:       "•Mix gram flour, spices, salt, and water into thick batter.\n•Dip egg halves into batter and deep fry till golden.\n•Serve hot with chutney.",
  },
  CatalogEntry {
    id:          46,
    name:        "Egg Kathi Roll",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 parathas\n2 eggs\n1 onion, sliced\n1/4 cup capsicum\n1 tbsp tomato sauce\nSalt and pepper to taste\nOil for cooking",
    steps:       "•Cook parathas and keep aside.\n•Beat eggs with salt and pepper.\n•Pour egg on tawa, place paratha on top to stick.\n•Flip, cook other side.\n•Add sautéed onion, capsicum, and sauce.\n•Roll and serve.",
  },
  CatalogEntry {
    id:          47,
    name:        "Baked Egg Muffins",
    category:    Category::EggEtarian,
    ingredients: "6 muffins:\n4 eggs\n1/2 cup spinach, chopped\n1/4 cup cheese\n1/4 cup diced bell pepper\nSalt and pepper to taste",
    steps:       "•Preheat oven to 180°C.\n•Beat eggs with salt and pepper.\n•Mix in spinach, cheese, and bell pepper.\n•Pour into greased muffin cups.\n•Bake 15–20 minutes till set.\n•Cool slightly and serve.",
  },
  CatalogEntry {
    id:          48,
    name:        "Egg Rice",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 cups cooked rice\n2 eggs\n1 onion, chopped\n1 green chilli, chopped\n1/4 tsp turmeric\n1/2 tsp pepper\n1 tbsp oil\nSalt to taste",
    steps:       "•Heat oil in a pan, sauté onions and chilli.\n•Add turmeric and salt.\n•Push aside, scramble eggs.\n•Add rice, mix well, sprinkle pepper.\n•Serve hot.",
  },
  CatalogEntry {
    id:          49,
    name:        "Egg Masala Sandwich",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 slices bread\n2 boiled eggs\n1/2 onion, chopped\n1/2 tomato, chopped\n1/2 tsp garam masala\nSalt to taste\nButter for toasting",
    steps:       "•Mash boiled eggs, mix with onion, tomato, spices, and salt.\n•Spread on bread slices.\n•Butter outer sides and toast till golden.\n•Serve hot.",
  },
  CatalogEntry {
    id:          50,
    name:        "Egg Salad Bowl",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 boiled eggs, sliced\n1 cup lettuce\n1/4 cup cherry tomatoes\n1/4 cucumber, sliced\n1 tbsp olive oil\n1 tbsp lemon juice\nSalt and pepper to taste",
    steps:       "•Arrange lettuce, tomato, and cucumber in a bowl.\n•Add sliced eggs on top.\n•Drizzle olive oil and lemon juice.\n•Season with salt and pepper.\n•Serve fresh.",
  },
  CatalogEntry {
    id:          51,
    name:        "Egg Curry with Coconut Milk",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n6 boiled eggs\n1 onion, chopped\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1/2 cup coconut milk\n1 tsp curry powder\n1/2 tsp turmeric\n1 tbsp oil\nSalt to taste",
    steps:       "•Heat oil, sauté onions and ginger-garlic paste.\n•Add tomato puree and spices, cook until oil separates.\n•Add coconut milk and simmer.\n•Add eggs and cook 5 minutes.\n•Serve with rice or appam.",
  },
  CatalogEntry {
    id:          52,
    name:        "Egg Bhuna Masala",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n4 boiled eggs\n2 onions, sliced\n2 tomatoes, pureed\n1 tbsp ginger-garlic paste\n1 tsp garam masala\n1/2 tsp chilli powder\nSalt to taste\n2 tbsp oil",
    steps:       "•Heat oil and sauté onions till golden.\n•Add ginger-garlic paste, tomato puree, and spices.\n•Cook till thick masala forms.\n•Add eggs, coat gently.\n•Serve hot with paratha.",
  },
  CatalogEntry {
    id:          53,
    name:        "Eggplant and Egg Stir-Fry",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 cup eggplant, diced\n2 eggs\n1 onion, sliced\n1 tbsp soy sauce\n1 tbsp oil\nSalt and pepper to taste",
    steps:       "•Heat oil in a pan and sauté onions and eggplant till soft.\n•Push aside and scramble eggs.\n•Add soy sauce, salt, and pepper.\n•Mix well and serve.",
  },
  CatalogEntry {
    id:          54,
    name:        "Egg Pulao",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 cup basmati rice\n2 boiled eggs\n1 onion, sliced\n1 tomato, chopped\n1 tsp cumin\n1/2 tsp garam masala\n1 tbsp ghee\nSalt to taste",
    steps:       "•Cook rice separately.\n•Heat ghee, add cumin, onion, and tomato.\n•Add spices and salt.\n•Add rice and mix.\n•Top with boiled eggs cut in halves and serve.",
  },
  CatalogEntry {
    id:          55,
    name:        "Cheese Omelette",
    category:    Category::EggEtarian,
    ingredients: "1 serving:\n2 eggs\n2 tbsp milk\n1/4 cup grated cheese\nSalt and pepper to taste\n1 tsp butter",
    steps:       "•Beat eggs with milk, salt, and pepper.\n•Heat butter in a pan and pour egg mixture.\n•Sprinkle cheese, fold and cook till set.\n•Serve hot.",
  },
  CatalogEntry {
    id:          56,
    name:        "Curried Egg Sandwich",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 slices bread\n2 boiled eggs, mashed\n1 tbsp mayonnaise\n1/2 tsp curry powder\nSalt and pepper to taste",
    steps:       "•Mix eggs with mayo, curry powder, salt, and pepper.\n•Spread between bread slices.\n•Serve fresh or toasted.",
  },
  CatalogEntry {
    id:          57,
    name:        "Vegetable Egg Pizza",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 pizza base\n2 eggs\n1/4 cup tomato sauce\n1/2 cup vegetables (bell pepper, onion, tomato)\n1/4 cup cheese\nSalt and oregano to taste",
    steps:       "•Spread sauce on pizza base.\n•Add vegetables and crack eggs on top.\n•Sprinkle cheese and seasoning.\n•Bake at 200°C for 10–12 minutes.\n•Serve hot.",
  },
  CatalogEntry {
    id:          58,
    name:        "Egg Idli",
    category:    Category::EggEtarian,
    ingredients: "4 servings:\n1 cup idli batter\n2 boiled eggs, chopped\n1 onion, chopped\n1 green chilli, chopped\nSalt to taste",
    steps:       "•Mix idli batter with onion, chilli, eggs, and salt.\n•Pour into greased idli moulds.\n•Steam 10–12 minutes.\n•Serve with chutney.",
  },
  CatalogEntry {
    id:          59,
    name:        "Eggplant Parmesan with Egg Coating",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 small eggplant, sliced\n1 egg, beaten\n1/4 cup breadcrumbs\n1/4 cup tomato sauce\n1/4 cup cheese\nSalt and pepper to taste",
    steps:       "•Dip eggplant slices in beaten egg, coat with breadcrumbs.\n•Pan-fry till golden.\n•Layer with tomato sauce and cheese.\n•Bake at 180°C for 10 minutes.\n•Serve warm.",
  },
  CatalogEntry {
    id:          60,
    name:        "Egg Paneer Bhurji",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 eggs\n100g paneer, crumbled\n1 onion, chopped\n1 tomato, chopped\n1/2 tsp turmeric\n1/2 tsp chilli powder\nSalt to taste\n1 tbsp oil",
    steps:       "•Heat oil, sauté onion and tomato.\n•Add spices, then paneer and eggs.\n•Stir continuously till eggs set.\n•Serve hot with roti.",
  },
  CatalogEntry {
    id:          61,
    name:        "Eggplant Stir-Fry with Scrambled Egg",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 cup chopped eggplant\n2 eggs\n1 onion, sliced\n1 tbsp soy sauce\n1 tbsp oil\nSalt and pepper to taste",
    steps:       "•Sauté onion and eggplant till tender.\n•Push aside, scramble eggs.\n•Add soy sauce, mix everything.\n•Serve hot.",
  },
  CatalogEntry {
    id:          62,
    name:        "Egg Poha",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n1 cup poha (flattened rice)\n2 eggs\n1 onion, chopped\n1 green chilli, chopped\n1/4 tsp turmeric\nSalt to taste\n1 tbsp oil",
    steps:       "•Rinse poha and drain.\n•Heat oil, sauté onions and chilli.\n•Add turmeric, salt, and eggs; scramble.\n•Add poha, mix well.\n•Serve with lemon.",
  },
  CatalogEntry {
    id:          63,
    name:        "Egg Spinach Sandwich",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 slices bread\n2 eggs\n1/2 cup spinach, chopped\n1 tbsp mayonnaise\nSalt and pepper to taste\nButter for toasting",
    steps:       "•Scramble eggs with spinach, salt, and pepper.\n•Spread mayo on bread, add filling.\n•Toast lightly with butter.\n•Serve warm.",
  },
  CatalogEntry {
    id:          64,
    name:        "Egg Tacos",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n4 small tortillas\n2 eggs\n1/4 cup chopped bell peppers\n1/4 cup onion\n1/4 cup cheese\nSalt and pepper to taste",
    steps:       "•Scramble eggs with onion and peppers.\n•Warm tortillas, fill with eggs and cheese.\n•Fold and serve.",
  },
  CatalogEntry {
    id:          65,
    name:        "Egg Fried Cauliflower Rice",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 cups grated cauliflower\n2 eggs\n1/2 cup mixed vegetables\n1 tbsp soy sauce\n1 tsp oil\nSalt and pepper to taste",
    steps:       "•Heat oil, add vegetables and cauliflower, stir-fry 5 minutes.\n•Push aside, scramble eggs.\n•Add soy sauce, salt, and pepper.\n•Mix well and serve.",
  },
  CatalogEntry {
    id:          66,
    name:        "Egg Veggie Pancakes",
    category:    Category::EggEtarian,
    ingredients: "4 small pancakes:\n2 eggs\n1/4 cup grated carrot\n1/4 cup chopped spinach\n2 tbsp flour\nSalt and pepper to taste\nOil for cooking",
    steps:       "•Whisk eggs, add veggies, flour, salt, and pepper.\n•Pour batter onto hot pan.\n•Cook both sides till golden.\n•Serve with ketchup.",
  },
  CatalogEntry {
    id:          67,
    name:        "Egg Ramen Bowl",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n100g ramen noodles\n2 eggs\n2 cups vegetable broth\n1 tbsp soy sauce\n1 tsp sesame oil\n1/2 cup mushrooms\nSpring onions for garnish",
    steps:       "•Cook noodles in broth with soy sauce and mushrooms.\n•Boil eggs separately, peel and halve.\n•Serve noodles in bowl with broth.\n•Top with eggs, drizzle sesame oil, and garnish.",
  },
  CatalogEntry {
    id:          68,
    name:        "Stuffed Bell Peppers with Egg",
    category:    Category::EggEtarian,
    ingredients: "2 servings:\n2 bell peppers, halved\n2 eggs\n1/4 cup onion, chopped\n1/4 cup spinach, chopped\nSalt and pepper to taste\n1 tbsp olive oil",
    steps:       "•Sauté onion and spinach lightly.\n•Place bell pepper halves on baking tray, add filling, crack egg on top.\n•Season with salt and pepper.\n•Bake at 180°C for 15 minutes.\n•Serve warm.",
  },
  CatalogEntry {
    id:          69,
    name:        "Butter Chicken",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g boneless chicken\n1 cup yogurt\n1 tbsp ginger garlic paste\n1 tsp chilli powder\n1/2 tsp turmeric\n1 tbsp lemon juice\n2 tbsp butter\n1 onion, chopped\n2 tomatoes, pureed\n1/2 cup cream\n1 tsp garam masala\nSalt to taste",
    steps:       "•Marinate chicken with yogurt, spices, lemon juice for 1 hour.\n•Cook chicken in pan until sealed.\n•In another pan, melt butter, add onion and tomato puree.\n•Add cream and garam masala.\n•Mix in cooked chicken and simmer for 10 minutes.\n•Serve with naan or rice.",
  },
  CatalogEntry {
    id:          70,
    name:        "Chicken Biryani",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g chicken\n2 cups basmati rice\n2 onions, sliced\n1 tomato, chopped\n1 tbsp ginger garlic paste\n1 tsp garam masala\n1/2 tsp turmeric\n2 tbsp ghee\n1/4 cup curd\nMint and coriander\nSalt to taste",
    steps:       "•Marinate chicken with curd and spices.\n•Fry onions till golden, add tomato and chicken.\n•Cook till tender.\n•Layer with parboiled rice, mint, coriander.\n•Cover and cook 15 minutes on low flame.\n•Serve hot with raita.",
  },
  CatalogEntry {
    id:          71,
    name:        "Fish Curry",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n400g fish pieces\n1 onion, chopped\n1 tomato, chopped\n1 tbsp ginger garlic paste\n1 cup coconut milk\n1 tsp turmeric\n1 tsp chilli powder\n1 tbsp oil\nSalt to taste",
    steps:       "•Marinate fish with salt and turmeric.\n•Sauté onion and ginger-garlic paste.\n•Add tomato and spices, cook till oil separates.\n•Pour coconut milk and simmer.\n•Add fish, cook gently for 10 minutes.\n•Serve with rice.",
  },
  CatalogEntry {
    id:          72,
    name:        "Chicken 65",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g boneless chicken\n1/2 cup curd\n1 tbsp ginger garlic paste\n1 tsp red chilli powder\n1/2 tsp turmeric\n2 tbsp cornflour\n1 tbsp rice flour\nOil for frying\nCurry leaves\nSalt to taste",
    steps:       "•Marinate chicken with all ingredients for 1 hour.\n•Deep fry till crisp.\n•Toss in fried curry leaves before serving.\n•Serve hot with lemon wedges.",
  },
  CatalogEntry {
    id:          73,
    name:        "Mutton Curry",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g mutton\n2 onions, sliced\n1 tomato, chopped\n1 tbsp ginger garlic paste\n1 tsp coriander powder\n1/2 tsp turmeric\n1 tsp garam masala\n1 cup water\nSalt and oil to taste",
    steps:       "•Pressure cook mutton with salt and turmeric for 3 whistles.\n•Sauté onions and paste till golden.\n•Add tomatoes, spices, and cooked mutton.\n•Simmer until gravy thickens.\n•Serve hot with roti or rice.",
  },
  CatalogEntry {
    id:          74,
    name:        "Prawn Masala",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g prawns, cleaned\n1 onion, chopped\n1 tomato, pureed\n1 tbsp ginger garlic paste\n1 tsp cumin\n1/2 tsp turmeric\n1/2 tsp chilli powder\n2 tbsp oil\nSalt to taste",
    steps:       "•Marinate prawns with turmeric and salt.\n•Sauté onion and paste till brown.\n•Add tomato puree and spices.\n•Add prawns, cook for 5–7 minutes.\n•Serve with lemon and rice.",
  },
  CatalogEntry {
    id:          75,
    name:        "Egg Chicken Curry",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n300g chicken\n2 boiled eggs\n1 onion, chopped\n1 tomato, chopped\n1 tbsp ginger garlic paste\n1 tsp curry powder\nSalt and oil to taste",
    steps:       "•Cook chicken with spices till soft.\n•Add boiled eggs and simmer in curry sauce.\n•Serve warm with chapati or rice.",
  },
  CatalogEntry {
    id:          76,
    name:        "Tandoori Chicken",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g chicken legs\n1 cup yogurt\n1 tbsp tandoori masala\n1 tbsp lemon juice\n1 tsp chilli powder\n1 tbsp oil\nSalt to taste",
    steps:       "•Marinate chicken in yogurt, lemon juice, and spices for 4 hours.\n•Bake at 220°C for 25 minutes.\n•Brush with oil halfway.\n•Serve hot with salad and mint chutney.",
  },
  CatalogEntry {
    id:          77,
    name:        "Fish Fry",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g fish fillets\n1 tbsp ginger garlic paste\n1 tsp chilli powder\n1/2 tsp turmeric\n1 tbsp lemon juice\nRice flour for coating\nOil for frying\nSalt to taste",
    steps:       "•Marinate fish with spices and lemon.\n•Coat in rice flour.\n•Shallow fry till crisp.\n•Serve with onion rings.",
  },
  CatalogEntry {
    id:          78,
    name:        "Chicken Keema",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n400g minced chicken\n1 onion, chopped\n1 tomato, chopped\n1 tbsp ginger garlic paste\n1/2 tsp turmeric\n1 tsp garam masala\n1 tbsp oil\nSalt to taste",
    steps:       "•Heat oil, sauté onion and paste.\n•Add tomato, spices, and chicken mince.\n•Cook until dry and aromatic.\n•Serve with pav or paratha.",
  },
  CatalogEntry {
    id:          79,
    name:        "Mutton Biryani",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g mutton\n2 cups basmati rice\n2 onions\n1 cup yogurt\n1 tbsp ginger garlic paste\nWhole spices\nSalt, ghee, and herbs to taste",
    steps:       "•Cook mutton with spices till tender.\n•Layer with half-cooked rice, ghee, and herbs.\n•Steam 20 minutes.\n•Serve with onion raita.",
  },
  CatalogEntry {
    id:          80,
    name:        "Fish Tikka",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g fish cubes\n1/2 cup curd\n1 tbsp ginger garlic paste\n1 tsp garam masala\n1 tsp lemon juice\nSalt to taste",
    steps:       "•Marinate fish with curd and spices.\n•Skewer and grill 10–12 minutes.\n•Brush with butter and serve hot.",
  },
  CatalogEntry {
    id:          81,
    name:        "Chicken Fried Rice",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n1 cup cooked rice\n1/2 cup shredded chicken\n1 egg\n1/2 cup mixed veggies\n1 tbsp soy sauce\nSalt and pepper\nOil for frying",
    steps:       "•Scramble egg and set aside.\n•Stir-fry vegetables and chicken.\n•Add rice, soy sauce, and egg.\n•Toss well and serve.",
  },
  CatalogEntry {
    id:          82,
    name:        "Prawn Fried Rice",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n1 cup rice\n100g prawns\n1/2 cup veggies\n1 tbsp soy sauce\n1 egg\nSalt and oil",
    steps:       "•Cook prawns till pink.\n•Add rice, veggies, soy sauce, and scrambled egg.\n•Toss well.\n•Serve hot.",
  },
  CatalogEntry {
    id:          83,
    name:        "Chicken Lollipop",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n8 chicken lollipops\n1/4 cup cornflour\n1 tbsp ginger garlic paste\n1 tbsp soy sauce\nSalt to taste\nOil for frying",
    steps:       "•Marinate lollipops with all ingredients.\n•Deep fry till golden.\n•Serve with schezwan sauce.",
  },
  CatalogEntry {
    id:          84,
    name:        "Fish Moilee",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n400g fish\n1 onion\n1 tomato\n1 cup coconut milk\n1 tsp mustard seeds\n1 tsp turmeric\nCurry leaves\nSalt and oil",
    steps:       "•Fry mustard seeds and curry leaves.\n•Add onion, tomato, and spices.\n•Pour coconut milk, add fish, simmer 10 minutes.\n•Serve with rice.",
  },
  CatalogEntry {
    id:          85,
    name:        "Chicken Curry",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g chicken\n2 onions\n2 tomatoes\n1 tbsp ginger garlic paste\n1 tsp garam masala\n1/2 tsp chilli powder\nOil and salt",
    steps:       "•Sauté onions and paste.\n•Add tomatoes and spices.\n•Add chicken, cook till done.\n•Serve hot.",
  },
  CatalogEntry {
    id:          86,
    name:        "Shrimp Coconut Curry",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g shrimp\n1 onion\n1 tomato\n1/2 cup coconut milk\n1 tsp curry powder\nSalt and oil",
    steps:       "•Sauté onion and tomato.\n•Add spices, coconut milk, and shrimp.\n•Simmer 8 minutes.\n•Serve with rice.",
  },
  CatalogEntry {
    id:          87,
    name:        "Egg Chicken Roll",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n2 parathas\n2 eggs\n1/2 cup cooked chicken pieces\nOnion, sauce, and spices\nOil for cooking",
    steps:       "•Make egg paratha.\n•Add cooked chicken and fillings.\n•Roll and serve.",
  },
  CatalogEntry {
    id:          88,
    name:        "Fish Cutlet",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n200g boiled fish\n1 boiled potato\n1 onion, chopped\n1 green chilli\n1 egg\nBreadcrumbs\nSalt and oil",
    steps:       "•Mash fish and potato with spices.\n•Shape cutlets, coat with egg and crumbs.\n•Fry till golden.\n•Serve with chutney.",
  },
  CatalogEntry {
    id:          89,
    name:        "Chicken Pakora",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g chicken\n1 cup gram flour\n1 tsp chilli powder\nSalt\nWater and oil for frying",
    steps:       "•Mix all ingredients into batter.\n•Deep fry chicken pieces till crisp.\n•Serve hot with sauce.",
  },
  CatalogEntry {
    id:          90,
    name:        "Mutton Keema Pav",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n400g minced mutton\n1 onion\n1 tomato\n1 tsp garam masala\nSalt\nOil for cooking",
    steps:       "•Cook keema with spices till dry.\n•Serve with buttered pav and lemon.",
  },
  CatalogEntry {
    id:          91,
    name:        "Chicken Momos",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n200g minced chicken\n1 onion\n1 carrot, grated\n1 tsp soy sauce\nDough for wrapper\nSalt and oil",
    steps:       "•Fill dumplings with chicken mixture.\n•Steam for 10 minutes.\n•Serve with spicy chutney.",
  },
  CatalogEntry {
    id:          92,
    name:        "Fish Curry with Tamarind",
    category:    Category::NonVegetarian,
    ingredients: "3 servings:\n300g fish\n1 onion\n1 tomato\n1 tbsp tamarind pulp\n1 tsp chilli powder\nSalt and oil",
    steps:       "•Sauté onion, add tomato and tamarind.\n•Add fish and cook till done.\n•Serve with rice.",
  },
  CatalogEntry {
    id:          93,
    name:        "Chicken Shawarma",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n200g chicken strips\n1 tsp garlic paste\n1 tsp lemon juice\n1 pita bread\nLettuce and sauce",
    steps:       "•Grill marinated chicken.\n•Stuff pita with chicken and veggies.\n•Wrap and serve.",
  },
  CatalogEntry {
    id:          94,
    name:        "Fish Biryani",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g fish\n2 cups basmati rice\n1 onion\n1 tomato\nSpices and ghee\nSalt to taste",
    steps:       "•Cook fish curry.\n•Layer with rice and ghee.\n•Steam 10 minutes.\n•Serve with raita.",
  },
  CatalogEntry {
    id:          95,
    name:        "Chicken Korma",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g chicken\n1/4 cup yogurt\n1 onion\n1 tbsp ginger garlic paste\n1/2 cup cashew paste\nSpices and ghee",
    steps:       "•Fry onion, add paste and yogurt.\n•Add chicken and cook till creamy.\n•Serve hot.",
  },
  CatalogEntry {
    id:          96,
    name:        "Mutton Rogan Josh",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n500g mutton\n1 onion\n1 tomato\n1 tbsp yogurt\n1 tsp garam masala\nSalt and oil",
    steps:       "•Cook mutton with yogurt and spices.\n•Simmer till tender.\n•Serve with naan.",
  },
  CatalogEntry {
    id:          97,
    name:        "Prawn Biryani",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n300g prawns\n2 cups rice\nOnions, tomato, and spices\nOil and salt",
    steps:       "•Cook prawns masala.\n•Layer with half-cooked rice.\n•Steam for 10 minutes.\n•Serve hot.",
  },
  CatalogEntry {
    id:          98,
    name:        "Chicken Nuggets",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n300g chicken mince\n1 egg\nBreadcrumbs\nSalt and pepper\nOil for frying",
    steps:       "•Shape mixture into nuggets.\n•Coat with egg and crumbs.\n•Fry till golden.",
  },
  CatalogEntry {
    id:          99,
    name:        "Fish Sandwich",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n2 fish fillets\nBread slices\nLettuce, tomato\nMayonnaise, salt, pepper",
    steps:       "•Cook fish fillets.\n•Assemble sandwich with veggies and mayo.\n•Serve fresh.",
  },
  CatalogEntry {
    id:          100,
    name:        "Garlic Butter Shrimp",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n200g shrimp\n2 tbsp butter\n4 garlic cloves\n1 tbsp lemon juice\nSalt and pepper",
    steps:       "•Melt butter, sauté garlic.\n•Add shrimp and cook 3–4 minutes.\n•Add lemon juice and serve.",
  },
  CatalogEntry {
    id:          101,
    name:        "Chicken Burger",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n200g chicken patty\n2 burger buns\nLettuce, tomato, cheese\nMayonnaise and ketchup",
    steps:       "•Cook patty on grill.\n•Assemble burger with toppings.\n•Serve hot.",
  },
  CatalogEntry {
    id:          102,
    name:        "Fish Tacos",
    category:    Category::NonVegetarian,
    ingredients: "2 servings:\n2 tortillas\n200g fish\n1/4 cup cabbage\n1 tbsp mayo\nLime juice and salt",
    steps:       "•Grill fish.\n•Assemble tacos with veggies and sauce.\n•Serve with lime wedges.",
  },
  CatalogEntry {
    id:          103,
    name:        "Chicken Pulao",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g chicken\n2 cups basmati rice\n1 onion\nWhole spices\nSalt, oil, and herbs",
    steps:       "•Sauté onion and spices.\n•Add chicken and rice.\n•Add water and cook till done.\n•Serve hot.",
  },
  CatalogEntry {
    id:          104,
    name:        "Fish Curry Kerala Style",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g fish\n1 onion\n1 tomato\n1 cup coconut milk\nCurry leaves and tamarind\nSpices and oil",
    steps:       "•Sauté onion and tomato.\n•Add coconut milk and spices.\n•Add fish, cook till done.\n•Serve with steamed rice.",
  },
  CatalogEntry {
    id:          105,
    name:        "Chicken Vindaloo",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g chicken\n2 onions\n2 tomatoes\nVinegar, garlic, and spices\nOil and salt",
    steps:       "•Marinate chicken in vinegar and spices.\n•Cook with onions and tomato.\n•Simmer till tender.\n•Serve spicy and hot.",
  },
  CatalogEntry {
    id:          106,
    name:        "Fish Finger",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n300g fish strips\n1 egg\nBreadcrumbs\nSalt, pepper\nOil for frying",
    steps:       "•Coat fish in egg and crumbs.\n•Deep fry till crisp.\n•Serve with tartar sauce.",
  },
  CatalogEntry {
    id:          107,
    name:        "Butter Garlic Chicken",
    category:    Category::NonVegetarian,
    ingredients: "4 servings:\n400g chicken\n2 tbsp butter\n4 garlic cloves\n1 tsp chilli flakes\nSalt and pepper",
    steps:       "•Melt butter, add garlic and chilli.\n•Cook chicken pieces till golden.\n•Serve with rice or noodles.",
  },
];

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn catalog_has_107_entries_with_sequential_ids() {
    assert_eq!(BUILTIN_RECIPES.len(), 107);
    for (i, entry) in BUILTIN_RECIPES.iter().enumerate() {
      assert_eq!(entry.id, i as RecipeId + 1);
    }
  }

  #[test]
  fn catalog_category_counts() {
    let count = |c: Category| BUILTIN_RECIPES.iter().filter(|e| e.category == c).count();
    assert_eq!(count(Category::Vegetarian), 28);
    assert_eq!(count(Category::EggEtarian), 40);
    assert_eq!(count(Category::NonVegetarian), 39);
  }

  #[test]
  fn every_entry_passes_validation() {
    for recipe in builtin_recipes() {
      assert!(recipe.is_default);
      assert!(recipe.video_path.is_none());
      assert!(
        recipe.to_new().validate().is_ok(),
        "built-in recipe {} is incomplete",
        recipe.id
      );
      assert!(!recipe.steps().is_empty());
    }
  }

  #[test]
  fn names_are_unique() {
    let names: HashSet<_> = BUILTIN_RECIPES.iter().map(|e| e.name).collect();
    assert_eq!(names.len(), BUILTIN_RECIPES.len());
  }
}
