//! Authored question sets and category definitions.

use crate::model::DifficultyTier;

pub(crate) struct SeedQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

pub(crate) struct SeedCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: DifficultyTier,
}

pub(crate) const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        id: "beginner",
        name: "Beginner",
        description: "Perfect for those new to AI and OpenAI technologies. Learn the fundamentals and basic concepts.",
        difficulty: DifficultyTier::Beginner,
    },
    SeedCategory {
        id: "intermediate",
        name: "Intermediate",
        description: "For those with some AI knowledge. Dive deeper into machine learning concepts and techniques.",
        difficulty: DifficultyTier::Intermediate,
    },
    SeedCategory {
        id: "advanced",
        name: "Advanced",
        description: "Advanced concepts for AI practitioners. Explore cutting-edge research and complex implementations.",
        difficulty: DifficultyTier::Advanced,
    },
];

const BEGINNER_LEVEL_1: &[SeedQuestion] = &[
    SeedQuestion {
        id: "b1q1",
        prompt: "What does AI stand for?",
        options: &[
            "Artificial Intelligence",
            "Automated Intelligence",
            "Advanced Intelligence",
            "Applied Intelligence",
        ],
        correct: 0,
        explanation: "AI stands for Artificial Intelligence, which refers to computer systems that can perform tasks typically requiring human intelligence.",
    },
    SeedQuestion {
        id: "b1q2",
        prompt: "Which company created ChatGPT?",
        options: &["Google", "Microsoft", "OpenAI", "Meta"],
        correct: 2,
        explanation: "ChatGPT was created by OpenAI, a leading AI research company.",
    },
    SeedQuestion {
        id: "b1q3",
        prompt: "What is machine learning?",
        options: &[
            "A type of computer hardware",
            "A subset of AI that learns from data",
            "A programming language",
            "A web browser",
        ],
        correct: 1,
        explanation: "Machine learning is a subset of AI that enables computers to learn and improve from data without being explicitly programmed.",
    },
    SeedQuestion {
        id: "b1q4",
        prompt: "What does \"prompt\" mean in AI context?",
        options: &[
            "A quick response",
            "Input text given to an AI model",
            "A type of AI model",
            "An error message",
        ],
        correct: 1,
        explanation: "A prompt is the input text or instruction given to an AI model to generate a response.",
    },
    SeedQuestion {
        id: "b1q5",
        prompt: "What is Natural Language Processing (NLP)?",
        options: &[
            "A programming language",
            "AI technology for understanding human language",
            "A type of computer",
            "A web development tool",
        ],
        correct: 1,
        explanation: "NLP is a branch of AI that helps computers understand, interpret, and generate human language.",
    },
];

const INTERMEDIATE_LEVEL_1: &[SeedQuestion] = &[
    SeedQuestion {
        id: "i1q1",
        prompt: "What is the transformer architecture?",
        options: &[
            "A type of robot",
            "A neural network architecture",
            "A programming framework",
            "A data structure",
        ],
        correct: 1,
        explanation: "The transformer is a neural network architecture that revolutionized NLP and forms the basis of models like GPT.",
    },
    SeedQuestion {
        id: "i1q2",
        prompt: "What does GPT stand for?",
        options: &[
            "General Purpose Technology",
            "Generative Pre-trained Transformer",
            "Global Processing Tool",
            "Graphical Programming Tool",
        ],
        correct: 1,
        explanation: "GPT stands for Generative Pre-trained Transformer, a type of language model architecture.",
    },
    SeedQuestion {
        id: "i1q3",
        prompt: "What is fine-tuning in AI?",
        options: &[
            "Adjusting hardware settings",
            "Training a pre-trained model on specific data",
            "Debugging code",
            "Optimizing performance",
        ],
        correct: 1,
        explanation: "Fine-tuning involves training a pre-trained model on specific data to adapt it for particular tasks.",
    },
    SeedQuestion {
        id: "i1q4",
        prompt: "What is the attention mechanism?",
        options: &[
            "A focus technique",
            "A way for models to focus on relevant parts of input",
            "A meditation practice",
            "A user interface feature",
        ],
        correct: 1,
        explanation: "The attention mechanism allows models to focus on different parts of the input when generating each part of the output.",
    },
    SeedQuestion {
        id: "i1q5",
        prompt: "What is reinforcement learning?",
        options: &[
            "Learning from rewards and penalties",
            "Memorizing information",
            "Copying other models",
            "Reading documentation",
        ],
        correct: 0,
        explanation: "Reinforcement learning is a type of machine learning where agents learn through interaction with an environment using rewards and penalties.",
    },
];

const ADVANCED_LEVEL_1: &[SeedQuestion] = &[
    SeedQuestion {
        id: "a1q1",
        prompt: "What is the primary challenge addressed by Constitutional AI?",
        options: &[
            "Model size optimization",
            "Alignment and safety",
            "Training speed",
            "Data efficiency",
        ],
        correct: 1,
        explanation: "Constitutional AI addresses the challenge of making AI systems more aligned with human values and safer to deploy.",
    },
    SeedQuestion {
        id: "a1q2",
        prompt: "What is the vanishing gradient problem?",
        options: &[
            "Colors becoming less visible",
            "Gradients becoming too small to update weights effectively",
            "Memory running out",
            "Code optimization",
        ],
        correct: 1,
        explanation: "The vanishing gradient problem occurs when gradients become exponentially small, making it difficult to train deep neural networks.",
    },
    SeedQuestion {
        id: "a1q3",
        prompt: "What is RLHF in AI development?",
        options: &[
            "Real-time Learning Heavy Framework",
            "Reinforcement Learning from Human Feedback",
            "Rapid Language Handling Function",
            "Recursive Logic for High Frequency",
        ],
        correct: 1,
        explanation: "RLHF (Reinforcement Learning from Human Feedback) is a technique used to train AI models using human preferences and feedback.",
    },
    SeedQuestion {
        id: "a1q4",
        prompt: "What is the purpose of layer normalization?",
        options: &[
            "To make layers the same size",
            "To stabilize and accelerate training",
            "To reduce model complexity",
            "To prevent overfitting",
        ],
        correct: 1,
        explanation: "Layer normalization helps stabilize training and can accelerate convergence by normalizing inputs across features.",
    },
    SeedQuestion {
        id: "a1q5",
        prompt: "What is few-shot learning?",
        options: &[
            "Learning with minimal examples",
            "Fast training techniques",
            "Short training sessions",
            "Quick decision making",
        ],
        correct: 0,
        explanation: "Few-shot learning is the ability of a model to learn new tasks with only a few examples, often leveraging prior knowledge.",
    },
];

/// Authored base set for a tier and level.
///
/// Only the first level of each tier is authored; every other level reuses
/// the beginner level-1 set.
pub(crate) fn base_questions(tier: DifficultyTier, level_number: u32) -> &'static [SeedQuestion] {
    match (tier, level_number) {
        (DifficultyTier::Beginner, 1) => BEGINNER_LEVEL_1,
        (DifficultyTier::Intermediate, 1) => INTERMEDIATE_LEVEL_1,
        (DifficultyTier::Advanced, 1) => ADVANCED_LEVEL_1,
        _ => BEGINNER_LEVEL_1,
    }
}
