//! Hand-written question sets served when generation under-yields.
//!
//! Generic entries may contain `{topic}`, substituted with the requested topic.

pub struct FallbackEntry {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

pub struct FallbackSet {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub entries: [FallbackEntry; 5],
}

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub static KEYWORD_SETS: [FallbackSet; 3] = [
    FallbackSet {
        name: "database",
        keywords: &["database", "dbms"],
        entries: [
            FallbackEntry {
                question: "What does DBMS stand for?",
                options: [
                    "Database Management System",
                    "Data Backup and Maintenance System",
                    "Distributed Binary Management System",
                    "Digital Business Management Software",
                ],
                correct: 0,
                explanation: "DBMS stands for Database Management System, which is software for creating and managing databases.",
            },
            FallbackEntry {
                question: "Which of the following is NOT a type of database model?",
                options: ["Relational", "Document-oriented", "Execution-based", "Hierarchical"],
                correct: 2,
                explanation: "Execution-based is not a database model. The common types include relational, document-oriented, hierarchical, and network models.",
            },
            FallbackEntry {
                question: "Which language is most commonly used to query relational databases?",
                options: ["XML", "SQL", "Python", "HTML"],
                correct: 1,
                explanation: "SQL (Structured Query Language) is the standard language for relational database management systems.",
            },
            FallbackEntry {
                question: "What is a primary key in a database?",
                options: [
                    "The most important table in a database",
                    "The password used to access the database",
                    "A unique identifier for each record in a table",
                    "The first column in any database table",
                ],
                correct: 2,
                explanation: "A primary key is a unique identifier for each record in a database table.",
            },
            FallbackEntry {
                question: "What does ACID refer to in database systems?",
                options: [
                    "Automated Column Integration Design",
                    "Algorithm for Continuous Input Detection",
                    "Atomicity, Consistency, Isolation, Durability",
                    "Advanced Computing in Databases",
                ],
                correct: 2,
                explanation: "ACID refers to Atomicity, Consistency, Isolation, Durability, the properties that guarantee reliable processing of database transactions.",
            },
        ],
    },
    FallbackSet {
        name: "programming",
        keywords: &["programming", "coding", "javascript", "python"],
        entries: [
            FallbackEntry {
                question: "Which programming paradigm emphasizes the use of functions and immutable data?",
                options: [
                    "Object-oriented programming",
                    "Functional programming",
                    "Procedural programming",
                    "Event-driven programming",
                ],
                correct: 1,
                explanation: "Functional programming emphasizes the application of functions and avoids changing state and mutable data.",
            },
            FallbackEntry {
                question: "What is the purpose of version control systems like Git?",
                options: [
                    "To compile code into executable programs",
                    "To track changes to source code over time",
                    "To automatically fix bugs in code",
                    "To optimize code for better performance",
                ],
                correct: 1,
                explanation: "Version control systems like Git track changes to files over time, allowing multiple developers to collaborate and maintain a history of changes.",
            },
            FallbackEntry {
                question: "What is the main difference between compiled and interpreted languages?",
                options: [
                    "Compiled languages are newer than interpreted languages",
                    "Interpreted languages execute code directly while compiled languages convert code to machine code first",
                    "Compiled languages can only run on specific operating systems",
                    "Interpreted languages are always faster than compiled languages",
                ],
                correct: 1,
                explanation: "Compiled languages translate code to machine code before execution, while interpreted languages execute code line by line without prior translation.",
            },
            FallbackEntry {
                question: "What does API stand for in software development?",
                options: [
                    "Application Programming Interface",
                    "Automated Program Integration",
                    "Advanced Programming Implementation",
                    "Application Process Interaction",
                ],
                correct: 0,
                explanation: "API stands for Application Programming Interface, which defines how different software components should interact.",
            },
            FallbackEntry {
                question: "What is the purpose of a constructor in object-oriented programming?",
                options: [
                    "To destroy objects when they are no longer needed",
                    "To initialize a newly created object",
                    "To convert objects from one type to another",
                    "To check if an object is valid",
                ],
                correct: 1,
                explanation: "Constructors are special methods used to initialize new objects and set their initial state when they are created.",
            },
        ],
    },
    FallbackSet {
        name: "machine learning",
        keywords: &["machine learning", "ml", "ai", "artificial intelligence"],
        entries: [
            FallbackEntry {
                question: "Which of the following is a supervised learning algorithm?",
                options: [
                    "K-means clustering",
                    "Linear regression",
                    "Principal Component Analysis",
                    "Autoencoders",
                ],
                correct: 1,
                explanation: "Linear regression is a supervised learning algorithm that uses labeled data to predict continuous values.",
            },
            FallbackEntry {
                question: "What is the primary goal of unsupervised learning?",
                options: [
                    "To make predictions based on labeled data",
                    "To find patterns and structure in unlabeled data",
                    "To reward or punish an agent based on actions",
                    "To mimic human reasoning exactly",
                ],
                correct: 1,
                explanation: "Unsupervised learning algorithms aim to discover patterns, groupings, or structures in data without using labeled examples.",
            },
            FallbackEntry {
                question: "What is overfitting in machine learning?",
                options: [
                    "When a model performs well on training data but poorly on new data",
                    "When a model is too simple to capture the underlying pattern",
                    "When a model needs more training epochs",
                    "When a model runs too slowly on large datasets",
                ],
                correct: 0,
                explanation: "Overfitting occurs when a model learns the training data too well, including its noise and outliers, and generalizes poorly to new data.",
            },
            FallbackEntry {
                question: "Which technique is used to reduce the dimensionality of data?",
                options: [
                    "Gradient descent",
                    "Backpropagation",
                    "Principal Component Analysis (PCA)",
                    "Cross-validation",
                ],
                correct: 2,
                explanation: "PCA is a dimensionality reduction technique that projects data onto the directions of greatest variance.",
            },
            FallbackEntry {
                question: "What is the purpose of a loss function in neural networks?",
                options: [
                    "To initialize the weights of the network",
                    "To measure how well the network is performing",
                    "To determine the architecture of the network",
                    "To store training examples",
                ],
                correct: 1,
                explanation: "A loss function quantifies the gap between predicted and actual values so the network can adjust its weights.",
            },
        ],
    },
];

pub static GENERIC_SET: FallbackSet = FallbackSet {
    name: "generic",
    keywords: &[],
    entries: [
        FallbackEntry {
            question: "What is the main focus of {topic}?",
            options: [
                "Understanding the fundamental concepts of {topic}",
                "Creating applications related to {topic}",
                "Managing resources in {topic}",
                "Analyzing data in {topic}",
            ],
            correct: 0,
            explanation: "The main focus is typically on understanding the fundamental concepts, which forms the basis for all other activities.",
        },
        FallbackEntry {
            question: "Which is NOT commonly associated with {topic}?",
            options: [
                "Data processing",
                "Algorithm design",
                "Quantum physics",
                "System architecture",
            ],
            correct: 2,
            explanation: "Quantum physics is a field of physics and is not directly associated with most computer science topics unless studying quantum computing.",
        },
        FallbackEntry {
            question: "Which programming paradigm emphasizes the use of functions and immutable data?",
            options: [
                "Object-oriented programming",
                "Functional programming",
                "Procedural programming",
                "Event-driven programming",
            ],
            correct: 1,
            explanation: "Functional programming emphasizes the application of functions and avoids changing state and mutable data.",
        },
        FallbackEntry {
            question: "What does CPU stand for?",
            options: [
                "Central Processing Unit",
                "Computer Personal Unit",
                "Central Program Utility",
                "Computing Processor Unit",
            ],
            correct: 0,
            explanation: "CPU stands for Central Processing Unit, the primary component of a computer that performs most of the processing.",
        },
        FallbackEntry {
            question: "Which of these is a principle of Object-Oriented Programming?",
            options: ["Sequencing", "Encapsulation", "Normalization", "Serialization"],
            correct: 1,
            explanation: "Encapsulation is one of the four principles of Object-Oriented Programming, along with inheritance, polymorphism, and abstraction.",
        },
    ],
};
