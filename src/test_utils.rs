#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuizQuestion;

    /// (question, options, answer letter, explanation); every entry mentions "graph".
    pub const GRAPH_QUESTIONS: [(&str, [&str; 4], &str, &str); 12] = [
        (
            "In graph theory, what is the degree of a vertex?",
            ["Number of incident edges", "Number of graph components", "Length of the longest path", "Weight of the heaviest edge"],
            "A",
            "The degree counts the edges that touch the vertex.",
        ),
        (
            "Which traversal explores a graph level by level?",
            ["Depth-first search", "Breadth-first search", "Topological sort", "Binary search"],
            "B",
            "Breadth-first search visits all neighbours before going deeper.",
        ),
        (
            "What makes a graph bipartite?",
            ["It has no edges", "It is fully connected", "Its vertices split into two independent sets", "It contains a triangle"],
            "C",
            "Bipartite graphs only have edges between the two vertex sets.",
        ),
        (
            "Which algorithm finds shortest paths in a weighted graph with non-negative edges?",
            ["Prim", "Kruskal", "Floyd cycle detection", "Dijkstra"],
            "D",
            "Dijkstra's algorithm greedily settles the closest unvisited vertex.",
        ),
        (
            "A connected acyclic graph is called what?",
            ["Tree", "Clique", "Cycle", "Multigraph"],
            "A",
            "Trees are exactly the connected graphs without cycles.",
        ),
        (
            "What does a graph adjacency matrix store?",
            ["Vertex labels only", "Whether each pair of vertices is joined", "The shortest path lengths", "Edge insertion order"],
            "B",
            "Cell (i, j) records whether an edge joins vertex i and vertex j.",
        ),
        (
            "Which graph property does Euler's formula relate for planar embeddings?",
            ["Colour and degree", "Weight and length", "Vertices, edges and faces", "Cuts and flows"],
            "C",
            "For connected planar graphs V - E + F equals two.",
        ),
        (
            "When does an undirected graph contain an Euler circuit?",
            ["When it has a leaf", "When it is bipartite", "When it is a tree", "When connected with every degree even"],
            "D",
            "Every vertex must be entered and left equally often on a closed walk.",
        ),
        (
            "What is a Hamiltonian cycle in a graph?",
            ["A cycle visiting every vertex exactly once", "A cycle using every edge once", "A cycle of length three", "A self loop"],
            "A",
            "Hamiltonian cycles visit each vertex once before returning home.",
        ),
        (
            "Which data structure suits sparse graph storage?",
            ["Dense matrix", "Adjacency list", "Bit array of pairs", "Ring buffer"],
            "B",
            "Adjacency lists only spend memory on edges that actually exist.",
        ),
        (
            "What does Kruskal's algorithm produce for a weighted graph?",
            ["A topological order", "A maximum matching", "A minimum spanning tree", "An Euler tour"],
            "C",
            "Kruskal adds the cheapest edges that do not close a cycle.",
        ),
        (
            "How many edges does a complete graph on n vertices have?",
            ["n", "2n", "n squared", "n(n-1)/2"],
            "D",
            "Every unordered pair of distinct vertices is joined exactly once.",
        ),
    ];

    fn section_block(number: usize, entry: &(&str, [&str; 4], &str, &str)) -> String {
        let (question, options, answer, explanation) = entry;
        format!(
            "### Question {number}\n{question}\n\n**A.** {}\n**B.** {}\n**C.** {}\n**D.** {}\n\n**Correct Answer:** {answer}\n\n**Explanation:** {explanation}\n\n",
            options[0], options[1], options[2], options[3]
        )
    }

    /// A well-formed response containing `GRAPH_QUESTIONS[range]`.
    pub fn graph_section_response(range: std::ops::Range<usize>) -> String {
        let mut raw = String::from(
            "## TOPIC OVERVIEW\nGraph theory studies vertices joined by edges.\n\n",
        );
        for (i, entry) in GRAPH_QUESTIONS[range].iter().enumerate() {
            raw.push_str(&section_block(i + 1, entry));
        }
        raw
    }

    pub fn section_response_with_malformed_block() -> String {
        "## TOPIC OVERVIEW
Database indexing speeds up lookups.

### Question 1
What is the main benefit of database indexing?

**A.** Smaller backups
**B.** Faster lookups
**C.** Fewer tables
**D.** Stronger passwords

**Correct Answer:** B

**Explanation:** An index lets the database find rows without scanning the whole table.

### Question 2
Which structure do most database indexes use, a B-tree or something else?

**A.** Linked list
**B.** Hash ring
**C.** B-tree
**D.** Stack frame

**Correct Answer:** C

**Explanation:** Balanced B-trees keep lookups logarithmic and support range scans.

### Question 3
Which database operation gets slower as more indexes are added?

**A.** Point reads
**B.** Inserts
**C.** Range scans
**D.** Joins on keys

**Correct Answer:** B

**Explanation:** Every insert must also update each index on the table.

### Question 4
Which database index type suits equality lookups?

**A.** Hash index
**B.** Bitmap index
**C.** Full scan

**Correct Answer:** A

**Explanation:** Hash indexes answer equality probes in constant time.
"
        .to_string()
    }

    pub fn labeled_response() -> String {
        "Here are your questions.

QUESTION: What is the main idea of round-robin scheduling in an operating system?
A. Each process gets a fixed time slice in turn
B. The shortest job always runs first
C. Processes run until they finish
D. Priorities never change
ANSWER: A
EXPLANATION: Round-robin gives every ready process an equal time quantum in rotation.

QUESTION: Which scheduling algorithm can starve long processes?
A. Round-robin
B. First-come first-served
C. Shortest job first
D. Lottery scheduling
ANSWER: C
EXPLANATION: Shortest job first keeps picking short jobs, so long ones may wait forever.
"
        .to_string()
    }

    pub fn duplicate_phrasing_response() -> String {
        "### Question 1
What is the main purpose of database normalization?
**A.** Reduce redundancy
**B.** Speed backups
**C.** Encrypt tables
**D.** Add indexes
**Correct Answer:** A
**Explanation:** Short.

### Question 2
What is the primary purpose of database normalization?
**A.** Reduce data redundancy
**B.** Speed up backups
**C.** Encrypt every table
**D.** Add more indexes
**Correct Answer:** A
**Explanation:** Normalization splits tables so each fact is stored once, which removes update anomalies.

### Question 3
Which normal form removes partial dependencies in database normalization?
**A.** First normal form
**B.** Second normal form
**C.** Boyce-Codd normal form
**D.** Fifth normal form
**Correct Answer:** B
**Explanation:** Second normal form removes attributes that depend on part of a composite key.
"
        .to_string()
    }

    pub fn sample_question(id: &str, text: &str) -> QuizQuestion {
        QuizQuestion::new(
            id,
            text,
            [
                "First option".to_string(),
                "Second option".to_string(),
                "Third option".to_string(),
                "Fourth option".to_string(),
            ],
            1,
            "The second option is the right one here.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::mcq_parser::dedup::word_overlap;

    #[test]
    fn graph_questions_are_pairwise_distinct() {
        for (i, a) in GRAPH_QUESTIONS.iter().enumerate() {
            for b in GRAPH_QUESTIONS.iter().skip(i + 1) {
                assert!(
                    word_overlap(a.0, b.0) <= 0.7,
                    "fixtures overlap: '{}' / '{}'",
                    a.0,
                    b.0
                );
            }
        }
    }

    #[test]
    fn graph_section_response_has_requested_blocks() {
        let raw = graph_section_response(0..4);
        assert_eq!(raw.matches("### Question").count(), 4);
        assert!(raw.starts_with("## TOPIC OVERVIEW"));
    }

    #[test]
    fn sample_question_is_well_formed() {
        assert!(sample_question("q-1", "Anything?").is_well_formed());
    }
}
