/// `(prompt, correct answer, options)`; the correct answer is always one of the options.
pub type QuestionTemplate = (&'static str, &'static str, [&'static str; 4]);

// Present tense of "aller".
pub static QUESTION_BANK: [QuestionTemplate; 6] = [
    ("Je ___ au parc.", "vais", ["vais", "vas", "va", "allons"]),
    ("Tu ___ à la plage.", "vas", ["vas", "vais", "va", "allez"]),
    ("Il ___ à l'école.", "va", ["va", "vas", "vont", "vais"]),
    ("Nous ___ voyager.", "allons", ["allons", "allez", "vont", "vas"]),
    ("Vous ___ bien ?", "allez", ["allez", "allons", "avez", "va"]),
    ("Ils ___ au stade.", "vont", ["vont", "allons", "va", "vas"]),
];
