use crate::MuscleGroup;

/// An entry of the built-in exercise catalog.
///
/// `equipment` is free text that may list several items separated by `+`, `/` or `,`. Use
/// [`crate::tags_of`] to obtain the individual equipment tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub equipment: &'static str,
}

/// All catalog records in declaration order.
#[must_use]
pub fn all_records() -> &'static [ExerciseRecord] {
    EXERCISES
}

#[must_use]
pub fn find_record(id: &str) -> Option<&'static ExerciseRecord> {
    EXERCISES.iter().find(|e| e.id == id)
}

static EXERCISES: &[ExerciseRecord] = &[
    ExerciseRecord {
        id: "chest-1",
        name: "Bench Press",
        muscle_group: MuscleGroup::Chest,
        equipment: "Barbell + Bench",
    },
    ExerciseRecord {
        id: "chest-2",
        name: "Incline Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        equipment: "Dumbbells + Incline Bench",
    },
    ExerciseRecord {
        id: "chest-3",
        name: "Dumbbell Chest Fly",
        muscle_group: MuscleGroup::Chest,
        equipment: "Dumbbells + Flat Bench",
    },
    ExerciseRecord {
        id: "chest-4",
        name: "Push-Up",
        muscle_group: MuscleGroup::Chest,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "chest-5",
        name: "Cable Chest Fly",
        muscle_group: MuscleGroup::Chest,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "shoulders-1",
        name: "Dumbbell Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "shoulders-2",
        name: "Arnold Press",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "shoulders-3",
        name: "Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "shoulders-4",
        name: "Reverse Dumbbell Fly",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "shoulders-5",
        name: "Machine Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Shoulder Press Machine",
    },
    ExerciseRecord {
        id: "shoulders-6",
        name: "Cable Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "back-1",
        name: "Pull-Up / Chin-Up",
        muscle_group: MuscleGroup::Back,
        equipment: "Pull-Up Bar",
    },
    ExerciseRecord {
        id: "back-2",
        name: "Inverted Row",
        muscle_group: MuscleGroup::Back,
        equipment: "Bar or Smith Machine",
    },
    ExerciseRecord {
        id: "back-3",
        name: "Lat Pulldown",
        muscle_group: MuscleGroup::Back,
        equipment: "Lat Pulldown Machine",
    },
    ExerciseRecord {
        id: "back-4",
        name: "Dumbbell Row",
        muscle_group: MuscleGroup::Back,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "back-5",
        name: "Barbell Row",
        muscle_group: MuscleGroup::Back,
        equipment: "Barbell + Bench",
    },
    ExerciseRecord {
        id: "back-6",
        name: "Seated Cable Row",
        muscle_group: MuscleGroup::Back,
        equipment: "Cable Row Machine",
    },
    ExerciseRecord {
        id: "back-7",
        name: "Assisted Pull-Up",
        muscle_group: MuscleGroup::Back,
        equipment: "Assisted Pull-Up Machine",
    },
    ExerciseRecord {
        id: "biceps-1",
        name: "Dumbbell Curl",
        muscle_group: MuscleGroup::Arms,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "biceps-2",
        name: "Hammer Curl",
        muscle_group: MuscleGroup::Arms,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "biceps-3",
        name: "Barbell Curl",
        muscle_group: MuscleGroup::Arms,
        equipment: "Barbell",
    },
    ExerciseRecord {
        id: "biceps-4",
        name: "Cable Curl",
        muscle_group: MuscleGroup::Arms,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "biceps-5",
        name: "Resistance Band Curl",
        muscle_group: MuscleGroup::Arms,
        equipment: "Resistance Bands",
    },
    ExerciseRecord {
        id: "triceps-1",
        name: "Tricep Dips",
        muscle_group: MuscleGroup::Arms,
        equipment: "Bench / Dip Bars",
    },
    ExerciseRecord {
        id: "triceps-2",
        name: "Dumbbell Overhead Triceps Extension",
        muscle_group: MuscleGroup::Arms,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "triceps-3",
        name: "Tricep Pushdown",
        muscle_group: MuscleGroup::Arms,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "triceps-4",
        name: "Close-Grip Push-Up",
        muscle_group: MuscleGroup::Arms,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "triceps-5",
        name: "Machine Triceps Extension",
        muscle_group: MuscleGroup::Arms,
        equipment: "Triceps Machine",
    },
    ExerciseRecord {
        id: "quads-1",
        name: "Bodyweight Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "quads-2",
        name: "Goblet Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: "Dumbbell",
    },
    ExerciseRecord {
        id: "quads-3",
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: "Dumbbells / Bodyweight",
    },
    ExerciseRecord {
        id: "quads-4",
        name: "Barbell Back Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: "Barbell + Rack",
    },
    ExerciseRecord {
        id: "quads-5",
        name: "Leg Extension",
        muscle_group: MuscleGroup::Legs,
        equipment: "Leg Extension Machine",
    },
    ExerciseRecord {
        id: "hamstrings-1",
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Legs,
        equipment: "Barbell / Dumbbells",
    },
    ExerciseRecord {
        id: "hamstrings-2",
        name: "Glute Bridge (Hamstring Focus)",
        muscle_group: MuscleGroup::Legs,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "hamstrings-3",
        name: "Lying Leg Curl",
        muscle_group: MuscleGroup::Legs,
        equipment: "Lying Leg Curl Machine",
    },
    ExerciseRecord {
        id: "hamstrings-4",
        name: "Seated Leg Curl",
        muscle_group: MuscleGroup::Legs,
        equipment: "Seated Hamstring Curl Machine",
    },
    ExerciseRecord {
        id: "hamstrings-5",
        name: "Stability Ball Leg Curl",
        muscle_group: MuscleGroup::Legs,
        equipment: "Exercise Ball",
    },
    ExerciseRecord {
        id: "glutes-1",
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Legs,
        equipment: "Bodyweight / Dumbbells",
    },
    ExerciseRecord {
        id: "glutes-2",
        name: "Hip Thrust",
        muscle_group: MuscleGroup::Legs,
        equipment: "Barbell / Dumbbells + Bench",
    },
    ExerciseRecord {
        id: "glutes-3",
        name: "Dumbbell Romanian Deadlift",
        muscle_group: MuscleGroup::Legs,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "glutes-4",
        name: "Cable Kickbacks",
        muscle_group: MuscleGroup::Legs,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "glutes-5",
        name: "Step-Ups",
        muscle_group: MuscleGroup::Legs,
        equipment: "Box + Dumbbells / Bodyweight",
    },
    ExerciseRecord {
        id: "calves-1",
        name: "Standing Calf Raise",
        muscle_group: MuscleGroup::Legs,
        equipment: "Bodyweight / Smith Machine",
    },
    ExerciseRecord {
        id: "calves-2",
        name: "Seated Calf Raise",
        muscle_group: MuscleGroup::Legs,
        equipment: "Seated Calf Raise Machine",
    },
    ExerciseRecord {
        id: "calves-3",
        name: "Dumbbell Calf Raise",
        muscle_group: MuscleGroup::Legs,
        equipment: "Dumbbells",
    },
    ExerciseRecord {
        id: "core-1",
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "core-2",
        name: "Crunch",
        muscle_group: MuscleGroup::Core,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "core-3",
        name: "Hanging Leg Raise",
        muscle_group: MuscleGroup::Core,
        equipment: "Pull-Up Bar",
    },
    ExerciseRecord {
        id: "core-4",
        name: "Cable Crunch",
        muscle_group: MuscleGroup::Core,
        equipment: "Cable Machine",
    },
    ExerciseRecord {
        id: "core-5",
        name: "Russian Twists",
        muscle_group: MuscleGroup::Core,
        equipment: "Bodyweight / Dumbbell",
    },
    ExerciseRecord {
        id: "core-6",
        name: "Bicycle Crunch",
        muscle_group: MuscleGroup::Core,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "cardio-1",
        name: "Treadmill Run/Walk",
        muscle_group: MuscleGroup::Cardio,
        equipment: "Treadmill",
    },
    ExerciseRecord {
        id: "cardio-2",
        name: "Stationary Bike",
        muscle_group: MuscleGroup::Cardio,
        equipment: "Stationary Bike",
    },
    ExerciseRecord {
        id: "cardio-3",
        name: "StairMaster",
        muscle_group: MuscleGroup::Cardio,
        equipment: "StairMaster",
    },
    ExerciseRecord {
        id: "cardio-4",
        name: "Rowing Machine",
        muscle_group: MuscleGroup::Cardio,
        equipment: "Rower",
    },
    ExerciseRecord {
        id: "cardio-5",
        name: "Jump Rope",
        muscle_group: MuscleGroup::Cardio,
        equipment: "Jump Rope",
    },
    ExerciseRecord {
        id: "cardio-6",
        name: "HIIT Bodyweight Circuit",
        muscle_group: MuscleGroup::Cardio,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "fullbody-1",
        name: "Burpee",
        muscle_group: MuscleGroup::FullBody,
        equipment: "Bodyweight",
    },
    ExerciseRecord {
        id: "fullbody-2",
        name: "Kettlebell Swing",
        muscle_group: MuscleGroup::FullBody,
        equipment: "Kettlebell",
    },
    ExerciseRecord {
        id: "fullbody-3",
        name: "Dumbbell Thruster",
        muscle_group: MuscleGroup::FullBody,
        equipment: "Dumbbells",
    },
];
