//! Subject-specific study advice, keyed by subject and assignment type.
//!
//! Lookup order: subject table, then the per-type default, then the
//! general `Other` entry. The last step always succeeds.

use crate::task::AssignmentType;

const MATH_EXAM: &str = "📐 MATHEMATICS EXAM STRATEGY:\n\
    \n\
    🎯 Focus Areas:\n\
    • Master fundamental formulas and theorems - create a formula sheet\n\
    • Practice solving problems under time pressure (set 20-min timers)\n\
    • Review past exams and identify recurring problem types\n\
    • Work through textbook examples without looking at solutions first\n\
    \n\
    💡 Problem-Solving Approach:\n\
    • Read each problem twice before starting\n\
    • Identify what type of problem it is (algebraic, geometric, calculus, etc.)\n\
    • Write down given information and what you need to find\n\
    • Show all work step-by-step for partial credit\n\
    • Check your answers by substituting back into original equations\n\
    \n\
    ⚠️ Common Pitfalls to Avoid:\n\
    • Rushing through calculation steps\n\
    • Forgetting to check units in word problems\n\
    • Not simplifying final answers\n\
    • Skipping steps in proofs";

const MATH_HOMEWORK: &str = "📚 MATHEMATICS HOMEWORK MASTERY:\n\
    \n\
    🔍 Step-by-Step Process:\n\
    • Start by reviewing relevant lecture notes and textbook sections\n\
    • Work through similar examples before attempting assigned problems\n\
    • Use online tools like Wolfram Alpha to verify your solutions\n\
    • Practice each type of problem until you can do it without help\n\
    \n\
    💻 Technology Integration:\n\
    • Use Desmos for graphing functions and visualizing problems\n\
    • Khan Academy for additional practice problems\n\
    • YouTube channels like Professor Leonard for detailed explanations\n\
    • Photomath app to check your work (but understand the steps!)\n\
    \n\
    📝 Organization Tips:\n\
    • Keep a dedicated math notebook with clear problem layouts\n\
    • Write out each step clearly - don't skip mental math\n\
    • Create a personal \"error log\" to track mistakes you commonly make\n\
    • Review homework before class to prepare questions for your teacher";

const MATH_PROJECT: &str = "🏗️ MATHEMATICS PROJECT FRAMEWORK:\n\
    \n\
    📋 Project Planning Phase:\n\
    • Clearly define the mathematical problem or research question\n\
    • Research real-world applications of the mathematical concepts\n\
    • Gather data sources and determine what calculations are needed\n\
    • Create a timeline with specific milestones\n\
    \n\
    🔬 Implementation Strategy:\n\
    • Start with simplified models before adding complexity\n\
    • Use mathematical software like MATLAB, Python, or Excel for calculations\n\
    • Document all assumptions and limitations of your model\n\
    • Create clear visualizations (graphs, charts) to illustrate findings\n\
    \n\
    📊 Presentation Excellence:\n\
    • Explain mathematical concepts in accessible language\n\
    • Include real-world context and applications\n\
    • Show your problem-solving process, not just final answers\n\
    • Prepare for questions about your methodology and assumptions";

const MATH_ESSAY: &str = "✍️ MATHEMATICS ESSAY EXCELLENCE:\n\
    \n\
    📖 Content Development:\n\
    • Focus on the historical development and applications of mathematical concepts\n\
    • Explore connections between different areas of mathematics\n\
    • Discuss how mathematical theories solve real-world problems\n\
    • Include biographical information about key mathematicians\n\
    \n\
    🎯 Structure and Flow:\n\
    • Introduction: Hook with a fascinating mathematical fact or application\n\
    • Body: Logical progression from basic concepts to advanced applications\n\
    • Use examples and analogies to make abstract concepts concrete\n\
    • Conclusion: Reflect on the broader impact of mathematics on society\n\
    \n\
    📚 Research Strategy:\n\
    • Use academic sources like Mathematical Reviews and JSTOR\n\
    • Include primary sources from famous mathematicians when possible\n\
    • Verify mathematical facts and historical claims\n\
    • Balance technical accuracy with readability for your audience";

const CS_EXAM: &str = "💻 COMPUTER SCIENCE EXAM MASTERY:\n\
    \n\
    🧠 Core Preparation Areas:\n\
    • Algorithm analysis: Practice Big O notation and complexity calculations\n\
    • Data structures: Implement arrays, linked lists, trees, graphs from scratch\n\
    • Coding problems: Solve 2-3 LeetCode problems daily leading up to exam\n\
    • System design: Understand scalability, databases, and architecture patterns\n\
    \n\
    ⌨️ Coding Excellence:\n\
    • Practice writing code by hand (no IDE assistance)\n\
    • Time yourself solving algorithmic problems\n\
    • Review common coding patterns (two pointers, sliding window, etc.)\n\
    • Understand debugging techniques and edge case handling\n\
    \n\
    🔍 Conceptual Understanding:\n\
    • Don't just memorize - understand WHY algorithms work\n\
    • Be able to trace through code execution step by step\n\
    • Know when to use different data structures\n\
    • Understand trade-offs between time and space complexity";

const CS_HOMEWORK: &str = "👨‍💻 COMPUTER SCIENCE HOMEWORK STRATEGY:\n\
    \n\
    🎯 Problem Decomposition:\n\
    • Read the entire assignment before writing any code\n\
    • Break complex problems into smaller, testable functions\n\
    • Write pseudocode first to organize your logic\n\
    • Start with the simplest possible solution, then optimize\n\
    \n\
    🛠️ Development Best Practices:\n\
    • Use version control (Git) to track your progress\n\
    • Write meaningful variable names and comments\n\
    • Test your code with edge cases and invalid inputs\n\
    • Follow the style guide specified by your instructor\n\
    \n\
    🔧 Debugging Mastery:\n\
    • Use print statements or debugger to trace execution\n\
    • Test functions individually before integrating\n\
    • Create test cases that cover normal, edge, and error conditions\n\
    • Don't be afraid to rewrite code if the logic is unclear\n\
    \n\
    📚 Learning Resources:\n\
    • Stack Overflow for specific coding questions\n\
    • GitHub for code examples and project inspiration\n\
    • Documentation for the programming language you're using\n\
    • Online compilers for quick testing without setup";

const CS_PROJECT: &str = "🚀 COMPUTER SCIENCE PROJECT DEVELOPMENT:\n\
    \n\
    📋 Planning and Architecture:\n\
    • Define clear requirements and user stories\n\
    • Choose appropriate technologies and frameworks\n\
    • Design your system architecture before coding\n\
    • Set up development environment and project structure\n\
    \n\
    💡 Implementation Strategy:\n\
    • Follow agile development principles\n\
    • Build a minimum viable product (MVP) first\n\
    • Implement core functionality before adding features\n\
    • Write tests as you develop (test-driven development)\n\
    \n\
    🔄 Version Control and Collaboration:\n\
    • Make frequent, meaningful commits to Git\n\
    • Use branching strategy for feature development\n\
    • Write clear commit messages describing changes\n\
    • Document your code and project setup in README\n\
    \n\
    📊 Testing and Deployment:\n\
    • Unit test individual components\n\
    • Integration test the complete system\n\
    • Consider user experience and interface design\n\
    • Deploy to a platform like GitHub Pages, Heroku, or AWS";

const CS_ESSAY: &str = "📝 COMPUTER SCIENCE ESSAY WRITING:\n\
    \n\
    🎯 Topic Development:\n\
    • Explore current trends: AI, blockchain, quantum computing, cybersecurity\n\
    • Analyze the societal impact of technology\n\
    • Compare different programming paradigms or technologies\n\
    • Discuss ethical implications of computing innovations\n\
    \n\
    🔬 Research Methodology:\n\
    • Use academic sources: ACM Digital Library, IEEE Xplore\n\
    • Include case studies and real-world examples\n\
    • Reference current industry practices and standards\n\
    • Cite recent research papers and technical documentation\n\
    \n\
    💡 Technical Writing Skills:\n\
    • Balance technical accuracy with readability\n\
    • Use diagrams and code snippets to illustrate concepts\n\
    • Define technical terms for non-expert readers\n\
    • Structure arguments logically with clear evidence";

const PHYSICS_EXAM: &str = "⚡ PHYSICS EXAM DOMINATION:\n\
    \n\
    🎯 Problem-Solving Methodology:\n\
    • Always start by drawing a diagram and identifying given information\n\
    • List relevant physics principles and equations\n\
    • Check if your answer makes physical sense (units, magnitude, direction)\n\
    • Practice solving problems without a calculator first\n\
    \n\
    📐 Mathematical Preparation:\n\
    • Master vector operations and trigonometry\n\
    • Be comfortable with calculus for advanced physics\n\
    • Understand when to use approximations\n\
    • Practice dimensional analysis to catch errors\n\
    \n\
    🧪 Conceptual Understanding:\n\
    • Don't just memorize formulas - understand the underlying principles\n\
    • Be able to explain physics concepts in plain English\n\
    • Know when different laws and theories apply\n\
    • Understand the assumptions and limitations of physics models\n\
    \n\
    ⚠️ Common Exam Pitfalls:\n\
    • Not reading the problem carefully (missing key information)\n\
    • Using wrong coordinate systems or reference frames\n\
    • Forgetting to convert units consistently\n\
    • Making sign errors with vectors and directions";

const PHYSICS_HOMEWORK: &str = "🔬 PHYSICS HOMEWORK EXCELLENCE:\n\
    \n\
    📊 Problem-Solving Process:\n\
    • Read the problem multiple times to fully understand what's being asked\n\
    • Identify the physics concepts involved\n\
    • Draw clear, labeled diagrams with coordinate systems\n\
    • List known quantities and what you need to find\n\
    • Choose appropriate equations and solve algebraically before substituting numbers\n\
    \n\
    💡 Conceptual Development:\n\
    • Don't just plug numbers into formulas - understand the physics\n\
    • Ask yourself \"What would happen if...?\" questions\n\
    • Connect problems to real-world situations\n\
    • Review the physics principles after solving each problem\n\
    \n\
    🛠️ Useful Tools and Resources:\n\
    • PhET simulations for interactive physics visualization\n\
    • Wolfram Alpha for checking calculations\n\
    • Khan Academy Physics for concept review\n\
    • YouTube channels like Physics Girl and MinutePhysics\n\
    \n\
    ✅ Quality Check Process:\n\
    • Verify units cancel correctly in your calculations\n\
    • Check if your answer is reasonable in magnitude\n\
    • Consider limiting cases (what happens if a variable approaches zero or infinity?)\n\
    • Review your work for algebraic and arithmetic errors";

const PHYSICS_PROJECT: &str = "🚀 PHYSICS PROJECT MASTERY:\n\
    \n\
    🔬 Experimental Design:\n\
    • Formulate a clear, testable hypothesis\n\
    • Identify and control variables in your experiment\n\
    • Plan data collection methods and measurement techniques\n\
    • Consider sources of error and uncertainty\n\
    \n\
    📊 Data Analysis Excellence:\n\
    • Use appropriate statistical methods and error analysis\n\
    • Create clear graphs with proper labels and units\n\
    • Fit models to your data and interpret parameters\n\
    • Discuss agreement between theory and experiment\n\
    \n\
    💻 Simulation and Modeling:\n\
    • Use software like Python, MATLAB, or Mathematica\n\
    • Start with simple models and add complexity gradually\n\
    • Validate your simulations against known results\n\
    • Explore parameter space to understand system behavior\n\
    \n\
    📋 Scientific Communication:\n\
    • Write in clear, objective scientific style\n\
    • Include proper citations of scientific literature\n\
    • Present results with appropriate significant figures\n\
    • Discuss implications and future research directions";

const PHYSICS_ESSAY: &str = "📚 PHYSICS ESSAY WRITING:\n\
    \n\
    🎯 Content Strategy:\n\
    • Explore the historical development of physics concepts\n\
    • Discuss applications of physics in technology and engineering\n\
    • Analyze current research frontiers in physics\n\
    • Connect physics principles to everyday phenomena\n\
    \n\
    🔬 Research Excellence:\n\
    • Use peer-reviewed scientific journals and textbooks\n\
    • Include perspectives from multiple physicists and researchers\n\
    • Verify scientific facts and historical information\n\
    • Stay current with recent discoveries and developments\n\
    \n\
    💡 Writing Techniques:\n\
    • Explain complex concepts using analogies and examples\n\
    • Use mathematical expressions when appropriate\n\
    • Include diagrams and figures to support your explanations\n\
    • Balance technical detail with accessibility";

const CHEMISTRY_EXAM: &str = "🧪 CHEMISTRY EXAM STRATEGY:\n\
    \n\
    🎯 Focus Areas:\n\
    • Master chemical equations and balancing techniques\n\
    • Understand molecular structures and bonding\n\
    • Practice stoichiometry and concentration calculations\n\
    • Review periodic table trends and properties\n\
    \n\
    💡 Problem-Solving Approach:\n\
    • Always balance chemical equations first\n\
    • Use dimensional analysis for conversions\n\
    • Draw Lewis structures for molecular problems\n\
    • Show all work with proper units\n\
    • Check that your answers make chemical sense\n\
    \n\
    ⚠️ Common Pitfalls to Avoid:\n\
    • Forgetting to balance equations\n\
    • Mixing up units in calculations\n\
    • Not considering chemical principles\n\
    • Rushing through stoichiometry problems";

const CHEMISTRY_LAB_REPORT: &str = "🧪 CHEMISTRY LAB REPORT EXCELLENCE:\n\
    \n\
    📋 Pre-Lab Preparation:\n\
    • Review safety protocols and chemical hazards\n\
    • Understand the experimental procedure thoroughly\n\
    • Prepare data tables and observation sheets\n\
    • Gather all required equipment and chemicals\n\
    \n\
    🔬 Experimental Execution:\n\
    • Follow safety procedures strictly\n\
    • Record all observations immediately\n\
    • Take precise measurements with proper units\n\
    • Note any unexpected reactions or observations\n\
    • Document experimental conditions (temperature, pressure, etc.)\n\
    \n\
    📊 Data Analysis:\n\
    • Perform all calculations with proper units\n\
    • Create clear graphs with labeled axes\n\
    • Include error analysis and uncertainty\n\
    • Compare results with theoretical values\n\
    • Identify sources of experimental error\n\
    \n\
    📝 Report Writing:\n\
    • Follow standard lab report format\n\
    • Include all required sections (Abstract, Introduction, Methods, Results, Discussion, Conclusion)\n\
    • Use clear, scientific language\n\
    • Include proper citations and references\n\
    • Discuss sources of error and improvements";

const CHEMISTRY_PROJECT: &str = "🧪 CHEMISTRY PROJECT DEVELOPMENT:\n\
    \n\
    🔬 Experimental Design:\n\
    • Formulate a clear, testable hypothesis\n\
    • Design controlled experiments with proper variables\n\
    • Consider safety requirements and chemical hazards\n\
    • Plan data collection methods and analysis\n\
    \n\
    📊 Research and Analysis:\n\
    • Conduct thorough literature review\n\
    • Use appropriate analytical techniques\n\
    • Perform statistical analysis of results\n\
    • Compare findings with existing research\n\
    \n\
    💻 Computational Chemistry:\n\
    • Use software like Gaussian, Spartan, or Avogadro\n\
    • Model molecular structures and reactions\n\
    • Perform energy calculations and optimizations\n\
    • Validate computational results with experimental data\n\
    \n\
    📋 Scientific Communication:\n\
    • Write in clear, objective scientific style\n\
    • Include proper chemical nomenclature\n\
    • Present data with appropriate significant figures\n\
    • Discuss implications and future research directions";

const CHEMISTRY_ESSAY: &str = "📚 CHEMISTRY ESSAY WRITING:\n\
    \n\
    🎯 Content Strategy:\n\
    • Explore chemical principles and their applications\n\
    • Discuss environmental chemistry and sustainability\n\
    • Analyze current research in chemical sciences\n\
    • Connect chemistry to everyday life and technology\n\
    \n\
    🔬 Research Excellence:\n\
    • Use peer-reviewed chemical journals and databases\n\
    • Include perspectives from multiple researchers\n\
    • Verify chemical facts and safety information\n\
    • Stay current with recent discoveries and developments\n\
    \n\
    💡 Writing Techniques:\n\
    • Use proper chemical nomenclature\n\
    • Include balanced chemical equations when relevant\n\
    • Explain complex concepts using analogies\n\
    • Balance technical detail with accessibility";

const DEFAULT_EXAM: &str = "📚 COMPREHENSIVE EXAM PREPARATION:\n\
    \n\
    🎯 Study Strategy:\n\
    • Create a detailed study schedule 2-3 weeks before the exam\n\
    • Review course materials systematically, focusing on key concepts\n\
    • Practice with past exams and sample questions\n\
    • Form study groups to discuss difficult concepts\n\
    \n\
    💡 Active Learning Techniques:\n\
    • Teach concepts to others or explain them out loud\n\
    • Create concept maps connecting related ideas\n\
    • Use flashcards for key terms and formulas\n\
    • Take practice tests under timed conditions\n\
    \n\
    ⚠️ Pre-Exam Preparation:\n\
    • Get adequate sleep the night before\n\
    • Eat a healthy breakfast on exam day\n\
    • Arrive early to reduce stress\n\
    • Bring all necessary materials and backups";

const DEFAULT_HOMEWORK: &str = "📋 HOMEWORK OPTIMIZATION:\n\
    \n\
    🎯 Planning and Organization:\n\
    • Read all instructions carefully before starting\n\
    • Break large assignments into smaller, manageable tasks\n\
    • Set specific deadlines for each component\n\
    • Gather all necessary resources and materials\n\
    \n\
    💡 Execution Excellence:\n\
    • Start with the most challenging parts when your mind is fresh\n\
    • Take regular breaks to maintain focus\n\
    • Double-check your work before submission\n\
    • Keep backups of all digital work\n\
    \n\
    🔄 Learning Integration:\n\
    • Connect homework to course concepts and lectures\n\
    • Ask questions when you encounter difficulties\n\
    • Review feedback on returned assignments\n\
    • Use homework as practice for exams";

const DEFAULT_PROJECT: &str = "🏗️ PROJECT MANAGEMENT MASTERY:\n\
    \n\
    📋 Planning Phase:\n\
    • Define project scope, objectives, and deliverables clearly\n\
    • Research thoroughly and gather all necessary resources\n\
    • Create a detailed timeline with milestones and deadlines\n\
    • Identify potential challenges and develop contingency plans\n\
    \n\
    💻 Execution Strategy:\n\
    • Follow a structured approach to development\n\
    • Document your process and decisions along the way\n\
    • Seek feedback from peers or instructors during development\n\
    • Test and refine your work iteratively\n\
    \n\
    📊 Quality Assurance:\n\
    • Review all components against initial requirements\n\
    • Proofread and edit all written materials\n\
    • Ensure all sources are properly cited\n\
    • Prepare for presentation or defense if required";

const DEFAULT_ESSAY: &str = "✍️ ESSAY WRITING EXCELLENCE:\n\
    \n\
    📚 Research and Planning:\n\
    • Understand the assignment requirements and grading criteria\n\
    • Develop a clear thesis statement and argument structure\n\
    • Gather credible sources from academic databases\n\
    • Create a detailed outline before writing\n\
    \n\
    💡 Writing Process:\n\
    • Write multiple drafts, focusing on content first\n\
    • Use clear topic sentences and logical transitions\n\
    • Support all claims with evidence and examples\n\
    • Maintain consistent style and voice throughout\n\
    \n\
    ✅ Revision and Editing:\n\
    • Review for logical flow and argument strength\n\
    • Check grammar, spelling, and citation format\n\
    • Read your essay aloud to catch awkward phrasing\n\
    • Get feedback from others before final submission";

const DEFAULT_PRESENTATION: &str = "🎤 PRESENTATION MASTERY:\n\
    \n\
    📋 Content Development:\n\
    • Know your audience and tailor content accordingly\n\
    • Structure presentation with clear introduction, body, and conclusion\n\
    • Use visual aids to enhance understanding, not distract\n\
    • Prepare for potential questions and challenges\n\
    \n\
    🎯 Delivery Excellence:\n\
    • Practice your presentation multiple times\n\
    • Work on clear speaking and appropriate pacing\n\
    • Use confident body language and eye contact\n\
    • Have backup plans for technical difficulties\n\
    \n\
    💡 Engagement Strategies:\n\
    • Start with a compelling hook or question\n\
    • Use stories and examples to illustrate points\n\
    • Interact with audience through questions or activities\n\
    • End with a memorable conclusion and call to action";

const DEFAULT_QUIZ: &str = "⚡ QUIZ PREPARATION STRATEGY:\n\
    \n\
    🎯 Focused Review:\n\
    • Identify key concepts likely to be covered\n\
    • Review recent lectures, readings, and assignments\n\
    • Practice with sample questions if available\n\
    • Create summary notes for quick review\n\
    \n\
    💡 Test-Taking Skills:\n\
    • Read all questions carefully before answering\n\
    • Manage your time effectively\n\
    • Answer easy questions first to build confidence\n\
    • Review answers if time permits\n\
    \n\
    🔄 Learning Integration:\n\
    • Use quizzes as checkpoints for understanding\n\
    • Review incorrect answers to identify knowledge gaps\n\
    • Connect quiz content to broader course themes\n\
    • Prepare more thoroughly for upcoming exams";

const DEFAULT_OTHER: &str = "🎯 GENERAL ACADEMIC EXCELLENCE:\n\
    \n\
    📋 Task Analysis:\n\
    • Break complex assignments into smaller, manageable components\n\
    • Identify required skills and knowledge for completion\n\
    • Set realistic goals and deadlines for each component\n\
    • Gather all necessary resources and tools\n\
    \n\
    💡 Execution Strategy:\n\
    • Start early to allow time for revisions and improvements\n\
    • Maintain organization and document your progress\n\
    • Seek help when needed from instructors, peers, or tutoring services\n\
    • Focus on quality and thoroughness over speed\n\
    \n\
    ✅ Quality Assurance:\n\
    • Review work against assignment requirements\n\
    • Check for completeness and accuracy\n\
    • Ensure proper formatting and presentation\n\
    • Submit on time and keep backups of all work";

fn subject_advice(subject: &str, assignment_type: &AssignmentType) -> Option<&'static str> {
    use AssignmentType::*;
    let advice = match (subject, assignment_type) {
        ("Mathematics", Exam) => MATH_EXAM,
        ("Mathematics", Homework) => MATH_HOMEWORK,
        ("Mathematics", Project) => MATH_PROJECT,
        ("Mathematics", Essay) => MATH_ESSAY,
        ("Computer Science", Exam) => CS_EXAM,
        ("Computer Science", Homework) => CS_HOMEWORK,
        ("Computer Science", Project) => CS_PROJECT,
        ("Computer Science", Essay) => CS_ESSAY,
        ("Physics", Exam) => PHYSICS_EXAM,
        ("Physics", Homework) => PHYSICS_HOMEWORK,
        ("Physics", Project) => PHYSICS_PROJECT,
        ("Physics", Essay) => PHYSICS_ESSAY,
        ("Chemistry", Exam) => CHEMISTRY_EXAM,
        ("Chemistry", LabReport) => CHEMISTRY_LAB_REPORT,
        ("Chemistry", Project) => CHEMISTRY_PROJECT,
        ("Chemistry", Essay) => CHEMISTRY_ESSAY,
        _ => return None,
    };
    Some(advice)
}

fn default_advice(assignment_type: &AssignmentType) -> Option<&'static str> {
    match assignment_type {
        AssignmentType::Exam => Some(DEFAULT_EXAM),
        AssignmentType::Homework => Some(DEFAULT_HOMEWORK),
        AssignmentType::Project => Some(DEFAULT_PROJECT),
        AssignmentType::Essay => Some(DEFAULT_ESSAY),
        AssignmentType::Presentation => Some(DEFAULT_PRESENTATION),
        AssignmentType::Quiz => Some(DEFAULT_QUIZ),
        AssignmentType::LabReport | AssignmentType::Other(_) => None,
    }
}

/// General advice used when nothing more specific exists.
pub fn general_advice() -> &'static str {
    DEFAULT_OTHER
}

/// Advice text for a subject and assignment type. Never empty.
pub fn advice_for(subject: &str, assignment_type: &AssignmentType) -> &'static str {
    subject_advice(subject, assignment_type)
        .or_else(|| default_advice(assignment_type))
        .unwrap_or(DEFAULT_OTHER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_table_wins() {
        let a = advice_for("Computer Science", &AssignmentType::Project);
        assert!(a.starts_with("🚀 COMPUTER SCIENCE PROJECT DEVELOPMENT:\n\n📋 Planning and Architecture:\n"));
        assert!(a.ends_with("• Deploy to a platform like GitHub Pages, Heroku, or AWS"));
    }

    #[test]
    fn test_falls_back_to_type_default() {
        // Physics has no Quiz entry.
        assert_eq!(advice_for("Physics", &AssignmentType::Quiz), DEFAULT_QUIZ);
        assert_eq!(advice_for("Art", &AssignmentType::Exam), DEFAULT_EXAM);
    }

    #[test]
    fn test_lab_report_only_in_chemistry() {
        assert_eq!(
            advice_for("Chemistry", &AssignmentType::LabReport),
            CHEMISTRY_LAB_REPORT
        );
        // No default entry for lab reports: general advice.
        assert_eq!(advice_for("Biology", &AssignmentType::LabReport), general_advice());
    }

    #[test]
    fn test_unknown_everything_gets_general() {
        let a = advice_for("Underwater Basket Weaving", &AssignmentType::parse("Nonexistent"));
        assert_eq!(a, general_advice());
        assert!(a.starts_with("🎯 GENERAL ACADEMIC EXCELLENCE:"));
    }

    #[test]
    fn test_subject_keys_are_case_sensitive() {
        assert_eq!(advice_for("mathematics", &AssignmentType::Exam), DEFAULT_EXAM);
        assert_ne!(advice_for("Mathematics", &AssignmentType::Exam), DEFAULT_EXAM);
    }

    #[test]
    fn test_escaped_quotes_survive() {
        assert!(MATH_HOMEWORK.contains("Create a personal \"error log\""));
        assert!(!MATH_EXAM.contains('\\'));
    }
}
