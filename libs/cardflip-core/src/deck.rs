//! Built-in deck used when no deck file is supplied.

use crate::types::Card;

/// Heading shown above the built-in deck.
pub const DEFAULT_DECK_TITLE: &str = "React Flashcards";
pub const DEFAULT_DECK_DESCRIPTION: &str = "Test your knowledge of React!";

const DEFAULT_CARDS: &[(&str, &str)] = &[
    (
        "What is the main goal of the React library created by Facebook for modern web development?",
        "Building dynamic UIs",
    ),
    (
        "Which structure does React use to optimize and manage updates more efficiently in the browser?",
        "Virtual DOM tree",
    ),
    (
        "What do we call the read-only inputs that allow data to be passed down to child components in React?",
        "Read-only component inputs",
    ),
    (
        "How do we describe the internal data that changes within a component and triggers re-renders in React?",
        "Mutable component state",
    ),
    (
        "Which specialized React functions allow you to use state and lifecycle features without writing class components?",
        "React Hooks library",
    ),
    (
        "Which React Hook is used for managing side effects such as data fetching or updating the DOM?",
        "useEffect side effect hook",
    ),
    (
        "Which React Hook do you use to declare a piece of local state in a functional component?",
        "useState for local state",
    ),
    (
        "How should you uniquely identify each list item for better rendering performance in React?",
        "Use unique keys property",
    ),
    (
        "Which CLI tools are widely used to manage and install dependencies in a React project environment?",
        "npm m ProjectCLI,ExpoCLI",
    ),
    (
        "What specialized React component reduces unnecessary re-renders by shallowly comparing props and state?",
        "React Pure Component class",
    ),
    (
        "Which open-source bundler is commonly utilized with React to package modules and assets for production?",
        "Webpack or Parcel bundler",
    ),
    (
        "Which preconfigured environment quickly sets up a React project with default scripts and configurations?",
        "Create React App tool",
    ),
];

/// The twelve React study cards, in their canonical order.
pub fn default_deck() -> Vec<Card> {
    DEFAULT_CARDS
        .iter()
        .map(|(question, answer)| Card::new(*question, *answer))
        .collect()
}
