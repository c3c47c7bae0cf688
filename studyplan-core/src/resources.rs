//! Learning resources keyed by subject name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

type Entry = (&'static str, &'static str, &'static str);

const MATHEMATICS: &[Entry] = &[
    (
        "Khan Academy - Mathematics",
        "Free comprehensive math courses from basic arithmetic to advanced calculus",
        "https://www.khanacademy.org/math",
    ),
    (
        "Professor Leonard - Calculus",
        "Clear step-by-step calculus explanations and problem solving",
        "https://www.youtube.com/channel/UCoHhuummRZaIVX7bD4t2czg",
    ),
    (
        "MIT OpenCourseWare - Math",
        "Free MIT mathematics courses including linear algebra and differential equations",
        "https://ocw.mit.edu/courses/mathematics/",
    ),
    (
        "Wolfram Alpha",
        "Computational engine for math problem solving and step-by-step solutions",
        "https://www.wolframalpha.com",
    ),
];

const COMPUTER_SCIENCE: &[Entry] = &[
    (
        "CS50x - Harvard",
        "Harvard's introduction to computer science covering algorithms and data structures",
        "https://cs50.harvard.edu/x/",
    ),
    (
        "freeCodeCamp",
        "Interactive coding lessons and projects in web development and programming",
        "https://www.freecodecamp.org",
    ),
    (
        "MIT 6.006 - Algorithms",
        "Introduction to algorithms course with video lectures and problem sets",
        "https://ocw.mit.edu/courses/6-006-introduction-to-algorithms-fall-2011/",
    ),
    (
        "Coding Train - YouTube",
        "Creative coding tutorials and programming challenges",
        "https://www.youtube.com/c/TheCodingTrain",
    ),
];

const PHYSICS: &[Entry] = &[
    (
        "Khan Academy - Physics",
        "Physics courses covering mechanics, electricity, magnetism, and modern physics",
        "https://www.khanacademy.org/science/physics",
    ),
    (
        "MIT 8.01 - Classical Mechanics",
        "MIT's physics course with video lectures and problem sets",
        "https://ocw.mit.edu/courses/8-01sc-classical-mechanics-fall-2016/",
    ),
    (
        "Physics Girl - YouTube",
        "Engaging physics explanations and experiments",
        "https://www.youtube.com/c/PhysicsGirl",
    ),
    (
        "PhET Interactive Simulations",
        "Interactive physics simulations for hands-on learning",
        "https://phet.colorado.edu/en/simulations/physics",
    ),
];

const CHEMISTRY: &[Entry] = &[
    (
        "Khan Academy - Chemistry",
        "Complete chemistry courses from general to organic chemistry",
        "https://www.khanacademy.org/science/chemistry",
    ),
    (
        "Crash Course Chemistry",
        "Fast-paced chemistry lessons covering major topics with visual explanations",
        "https://www.youtube.com/playlist?list=PL8dPuuaLjXtPHzzYuWy6fYEaX9mQQ8oGr",
    ),
    (
        "ChemLibreTexts",
        "Open-access chemistry textbooks and resources",
        "https://chem.libretexts.org/",
    ),
    (
        "MIT 5.111 - Chemistry",
        "MIT general chemistry course with lectures and materials",
        "https://ocw.mit.edu/courses/5-111sc-principles-of-chemical-science-fall-2014/",
    ),
];

const BIOLOGY: &[Entry] = &[
    (
        "Khan Academy - Biology",
        "Biology courses covering molecular biology, genetics, and ecology",
        "https://www.khanacademy.org/science/biology",
    ),
    (
        "Crash Course Biology",
        "Comprehensive biology topics explained with animations",
        "https://www.youtube.com/playlist?list=PL3EED4C1D684D3ADF",
    ),
    (
        "MIT 7.012 - Biology",
        "MIT introduction to biology with molecular focus",
        "https://ocw.mit.edu/courses/7-012-introduction-to-biology-fall-2004/",
    ),
    (
        "iBiology",
        "Talks by leading scientists on cutting-edge biology research",
        "https://www.ibiology.org/",
    ),
];

const LITERATURE: &[Entry] = &[
    (
        "Yale Open Courses - Literature",
        "Yale literature courses including Shakespeare and modern poetry",
        "https://oyc.yale.edu/english",
    ),
    (
        "Crash Course Literature",
        "Analysis of major literary works and writing techniques",
        "https://www.youtube.com/playlist?list=PL8dPuuaLjXtOeEc9ME62zTfqc0h6Pe8vb",
    ),
    (
        "Poetry Foundation",
        "Extensive collection of poems with analysis and educational resources",
        "https://www.poetryfoundation.org/",
    ),
    (
        "Purdue OWL",
        "Writing and citation guidelines for academic papers",
        "https://owl.purdue.edu/owl/research_and_citation/",
    ),
];

const HISTORY: &[Entry] = &[
    (
        "Khan Academy - World History",
        "Comprehensive world history from ancient civilizations to modern times",
        "https://www.khanacademy.org/humanities/world-history",
    ),
    (
        "Crash Course World History",
        "Fast-paced world history lessons with engaging visuals",
        "https://www.youtube.com/playlist?list=PLBDA2E52FB1EF80C9",
    ),
    (
        "Yale Open Courses - History",
        "Yale history courses covering various periods and regions",
        "https://oyc.yale.edu/history",
    ),
    (
        "Primary Source Documents",
        "Historical documents and sources for research",
        "https://www.loc.gov/teachers/",
    ),
];

const ENGLISH: &[Entry] = &[
    (
        "Khan Academy - Grammar",
        "English grammar, writing skills, and essay composition",
        "https://www.khanacademy.org/humanities/grammar",
    ),
    (
        "Purdue OWL Writing Lab",
        "Comprehensive writing resources and citation guides",
        "https://owl.purdue.edu/owl/purdue_owl.html",
    ),
    (
        "Grammarly Handbook",
        "Grammar rules, writing tips, and style guidelines",
        "https://www.grammarly.com/blog/handbook/",
    ),
    (
        "TED-Ed Writing",
        "Short videos on writing techniques and literary analysis",
        "https://ed.ted.com/lessons?category=literature-language-arts",
    ),
];

/// Appended to every subject's list.
const GENERAL: &[Entry] = &[
    (
        "Coursera",
        "University-level courses from top institutions worldwide",
        "https://www.coursera.org",
    ),
    (
        "edX",
        "Free online courses from Harvard, MIT, and other universities",
        "https://www.edx.org",
    ),
    (
        "Study.com",
        "Video lessons and practice tests for various subjects",
        "https://study.com",
    ),
    (
        "Quizlet",
        "Flashcards and study tools for memorization and review",
        "https://quizlet.com",
    ),
];

/// Subject-specific entries. Exact, case-sensitive match on the subject
/// name: "math" does not find "Mathematics".
fn subject_entries(subject: &str) -> &'static [Entry] {
    match subject {
        "Mathematics" => MATHEMATICS,
        "Computer Science" => COMPUTER_SCIENCE,
        "Physics" => PHYSICS,
        "Chemistry" => CHEMISTRY,
        "Biology" => BIOLOGY,
        "Literature" => LITERATURE,
        "History" => HISTORY,
        "English" => ENGLISH,
        _ => &[],
    }
}

/// Subject resources (possibly none) followed by the general list.
pub fn resources_for(subject: &str) -> Vec<Resource> {
    subject_entries(subject)
        .iter()
        .chain(GENERAL)
        .map(|(title, description, url)| Resource {
            title: title.to_string(),
            description: description.to_string(),
            url: Some(url.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mathematics_then_general() {
        let r = resources_for("Mathematics");
        assert_eq!(r.len(), 8);
        assert_eq!(r[0].title, "Khan Academy - Mathematics");
        assert_eq!(r[3].title, "Wolfram Alpha");
        let tail: Vec<&str> = r[4..].iter().map(|x| x.title.as_str()).collect();
        assert_eq!(tail, vec!["Coursera", "edX", "Study.com", "Quizlet"]);
    }

    #[test]
    fn test_every_subject_has_four_entries() {
        for s in [
            "Mathematics",
            "Computer Science",
            "Physics",
            "Chemistry",
            "Biology",
            "Literature",
            "History",
            "English",
        ] {
            assert_eq!(resources_for(s).len(), 8, "{s}");
        }
    }

    #[test]
    fn test_unknown_subject_gets_general_only() {
        let r = resources_for("math");
        assert_eq!(r.len(), 4);
        assert_eq!(r[0].title, "Coursera");
    }
}
