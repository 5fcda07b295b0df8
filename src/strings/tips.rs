//! # Built-in Tip Catalog
//!
//! The 53 tips of *The Pragmatic Programmer*, in book order.

pub const PRAGMATIC_TIPS: &[(u32, &str, &str)] = &[
    (
        1,
        "Care About Your Craft",
        "Software development is a craft. Without passion and interest in the quality of your work, you will never become a good developer.",
    ),
    (
        2,
        "Think! About Your Work",
        "Don't work on autopilot. Think continuously about what you're doing, how you're doing it, and why you're doing it.",
    ),
    (
        3,
        "You Have Agency",
        "You have control over your career and your decisions. Take responsibility for your professional growth and your projects.",
    ),
    (
        4,
        "Provide Options, Don't Make Lame Excuses",
        "Instead of making excuses, present solution options. Show ways how problems can be solved.",
    ),
    (
        5,
        "Don't Live with Broken Windows",
        "Bad code spreads like broken windows in abandoned buildings. Fix problems immediately before they spread.",
    ),
    (
        6,
        "Be a Catalyst for Change",
        "Large changes are often difficult to implement. Start with small, manageable improvements and build on them.",
    ),
    (
        7,
        "Remember the Big Picture",
        "Never lose sight of the big picture. Watch for creeping degradation in your project.",
    ),
    (
        8,
        "Make Quality a Requirements Issue",
        "Quality is not an add-on, but a requirement. Define quality standards explicitly with your stakeholders.",
    ),
    (
        9,
        "Invest Regularly in Your Knowledge Portfolio",
        "Treat your knowledge like an investment portfolio. Continuously learn new technologies and concepts.",
    ),
    (
        10,
        "Critically Analyze What You Read and Hear",
        "Question everything critically. Not everything you read or hear is correct or applicable to your situation.",
    ),
    (
        11,
        "English is Just Another Programming Language",
        "Communication is just as important as programming. Invest in your writing and communication skills.",
    ),
    (
        12,
        "It's Both What You Say and the Way You Say It",
        "Not only the content matters, but also the way of presentation. Know your audience and adapt your communication accordingly.",
    ),
    (
        13,
        "Build Documentation In, Don't Bolt It On",
        "Documentation should be considered from the beginning, not added afterwards. Integrate it into your development process.",
    ),
    (
        14,
        "Good Design Is Easier to Change Than Bad Design",
        "Flexibility and adaptability are signs of good design. Code should be easy to change (ETC - Easier to Change).",
    ),
    (
        15,
        "DRY - Don't Repeat Yourself",
        "Every piece of knowledge should exist only once in the system. Repetition leads to inconsistencies and maintenance problems.",
    ),
    (
        16,
        "Make It Easy to Reuse",
        "Design modules and components so they can be easily reused. Promote reuse through good interfaces.",
    ),
    (
        17,
        "Eliminate Effects Between Unrelated Things",
        "Orthogonality means that changes in one area have no unexpected effects on other areas.",
    ),
    (
        18,
        "There Are No Final Decisions",
        "Keep your architecture flexible. Decisions made today may be obsolete tomorrow.",
    ),
    (
        19,
        "Forgo Following Fads",
        "Don't follow every trend. Choose technologies based on their merits for your specific problem.",
    ),
    (
        20,
        "Use Tracer Bullets to Find the Target",
        "Implement a thin slice through the entire system early to identify risks and get feedback.",
    ),
    (
        21,
        "Prototype to Learn",
        "Create prototypes to understand unclear requirements and evaluate technical risks.",
    ),
    (
        22,
        "Program Close to the Problem Domain",
        "Use domain-specific languages and abstractions that correspond to the problem domain.",
    ),
    (
        23,
        "Estimate to Avoid Surprises",
        "Learn to estimate and communicate the uncertainty of your estimates clearly.",
    ),
    (
        24,
        "Use Configuration to Make Your Code More Flexible",
        "Extract changeable values into configuration files to increase flexibility.",
    ),
    (
        25,
        "Put Abstractions in Code, Details in Metadata",
        "Keep general concepts in code and specific details in metadata or configurations.",
    ),
    (
        26,
        "Analyze Workflow to Improve Concurrency",
        "Understand workflows to identify opportunities for parallel processing.",
    ),
    (
        27,
        "Design Using Services",
        "Think in terms of services rather than objects. Services are independent, well-defined units.",
    ),
    (
        28,
        "Always Design for Concurrency",
        "Even if you don't need parallelism today, design so it can be added later.",
    ),
    (
        29,
        "Shared State Is Incorrect State",
        "Shared state leads to race conditions and hard-to-trace errors.",
    ),
    (
        30,
        "Random Failures Are Often Concurrency Issues",
        "Sporadic, hard-to-reproduce errors are often due to concurrency problems.",
    ),
    (
        31,
        "Use Actors for Concurrency Without Shared State",
        "The Actor model provides an elegant solution for concurrency without shared state.",
    ),
    (
        32,
        "Listen to Your Lizard Brain",
        "Trust your intuition. If something doesn't feel right, something probably isn't right.",
    ),
    (
        33,
        "Programming Is About Code, But Programs Are About Data",
        "Understand your data structures. Often the design of data is more important than the code.",
    ),
    (
        34,
        "Don't Gather Requirements – Dig for Them",
        "Requirements are often not obvious. Ask the right questions to understand the true needs.",
    ),
    (
        35,
        "Work with a User to Think Like a User",
        "Work closely with end users to understand their perspective.",
    ),
    (
        36,
        "Abstractions Live Longer than Details",
        "Invest in good abstractions. They survive longer than specific implementation details.",
    ),
    (
        37,
        "Use a Project Glossary",
        "Define terms clearly and use them consistently across the entire team.",
    ),
    (
        38,
        "Don't Think Outside the Box – Find the Box",
        "Understand the constraints and boundaries of your problem before developing solutions.",
    ),
    (
        39,
        "Start When You're Ready",
        "Only begin implementation when you truly understand the problem.",
    ),
    (
        40,
        "Some Things Are Better Done than Described",
        "Sometimes it's more efficient to create a prototype than to write a detailed specification.",
    ),
    (
        41,
        "Don't Be a Slave to Formal Methods",
        "Formal methods are tools, not an end in themselves. Use them when they are helpful.",
    ),
    (
        42,
        "Expensive Tools Don't Produce Better Designs",
        "Good designs come from thinking, not from expensive software.",
    ),
    (
        43,
        "Organize Teams Around Functionality",
        "Structure teams by functionality, not by technology or role.",
    ),
    (
        44,
        "Don't Use Manual Procedures",
        "Automate repeatable processes. Manual steps are error-prone.",
    ),
    (
        45,
        "Test Early, Test Often, Test Automatically",
        "Tests are your safety net. The earlier and more frequently you test, the better.",
    ),
    (
        46,
        "Coding Ain't Done 'Til All the Tests Run",
        "Code is only finished when all tests run successfully.",
    ),
    (
        47,
        "Use Saboteurs to Test Your Testing",
        "Deliberately introduce errors to test whether your tests detect them.",
    ),
    (
        48,
        "Test State Coverage, Not Code Coverage",
        "More important than code coverage is whether all possible states are tested.",
    ),
    (
        49,
        "Find Bugs Once",
        "When you find a bug, write a test that reproduces it before fixing it.",
    ),
    (
        50,
        "Don't Use Wizard Code You Don't Understand",
        "Only use code you understand. Generated code can cause unexpected problems.",
    ),
    (
        51,
        "Don't Panic",
        "Stay calm when problems arise. Panic leads to poor decisions.",
    ),
    (
        52,
        "Finish What You Start",
        "Bring projects to completion. Unfinished work has no value.",
    ),
    (
        53,
        "Sign Your Work",
        "Stand behind your code. Quality comes from pride in your own work.",
    ),
];
