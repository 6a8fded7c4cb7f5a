use chrono::NaiveDate;
use fitlog_domain as domain;

pub static WORKOUTS: std::sync::LazyLock<Vec<domain::Workout>> =
    std::sync::LazyLock::new(|| vec![WORKOUT.clone(), WORKOUT_2.clone()]);

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: "1709280000000-a1b2c3".into(),
        name: "Run".to_string(),
        duration: 30,
        calories: 200,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: "1709193600000-d4e5f6".into(),
        name: "Swim".to_string(),
        duration: 45,
        calories: 350,
        date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    });
