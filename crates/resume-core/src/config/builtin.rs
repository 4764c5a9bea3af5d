/// Default skill vocabulary.
pub const SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Data Analysis",
    "SQL",
    "Excel",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
    "diploma",
];

pub const WORK_KEYWORDS: &[&str] = &["experience", "worked", "employment", "responsibilities"];
