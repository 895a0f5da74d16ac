// Algorithm catalog: metadata, listings, and runner references

pub mod listings;

use std::fmt;

use crate::runners::{
    backtracking, dynamic, hashing, rewrite, searching, sliding_window, sorting, traversal,
    two_pointer, Runner, RunnerError,
};

/// Algorithm families shown as category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sorting,
    Searching,
    TwoPointer,
    ArrayProblems,
    HashSet,
    SlidingWindow,
    Backtracking,
    Traversal,
    Dynamic,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Sorting,
        Category::Searching,
        Category::TwoPointer,
        Category::ArrayProblems,
        Category::HashSet,
        Category::SlidingWindow,
        Category::Backtracking,
        Category::Traversal,
        Category::Dynamic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::TwoPointer => "two-pointer",
            Category::ArrayProblems => "array-problems",
            Category::HashSet => "hash-set",
            Category::SlidingWindow => "sliding-window",
            Category::Backtracking => "backtracking",
            Category::Traversal => "traversal",
            Category::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which extra parameter the controller must supply alongside the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Only the array.
    None,
    /// A search target drawn from the array.
    Target,
    /// A target sum, not necessarily reachable.
    TargetSum,
    /// A fixed window size.
    WindowSize,
    /// A rotation count.
    RotateCount,
    /// A distinct-value threshold.
    DistinctCount,
    /// An N-Queens board size; the array is unused.
    BoardSize,
    /// A Fibonacci index; the array is unused.
    FibIndex,
    /// A second sequence of comparable length.
    SecondSequence,
}

/// One catalogued algorithm: immutable metadata plus its instrumented
/// runner. Loaded once at startup into [`Catalog`].
#[derive(Debug)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub complexity: &'static str,
    pub listing: &'static str,
    pub params: ParamKind,
    /// The algorithm only behaves sensibly on sorted input; the controller
    /// sorts the working array before running it.
    pub requires_sorted: bool,
    pub runner: Runner,
}

/// The algorithm registry: an explicit value constructed once at startup and
/// passed by reference wherever lookups are needed. Lookup misses are
/// `None`, reported by the caller, never a panic.
pub struct Catalog {
    entries: Vec<AlgorithmInfo>,
}

impl Catalog {
    /// The full standard catalog.
    pub fn standard() -> Self {
        Catalog {
            entries: standard_entries(),
        }
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&AlgorithmInfo> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.name == name)
    }

    /// Lookup that reports a miss instead of silently yielding nothing.
    pub fn require(
        &self,
        category: Category,
        name: &str,
    ) -> Result<&AlgorithmInfo, RunnerError> {
        self.get(category, name)
            .ok_or_else(|| RunnerError::UnknownAlgorithm {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Entries of one category in registration order.
    pub fn in_category(&self, category: Category) -> Vec<&AlgorithmInfo> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn entries(&self) -> &[AlgorithmInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Plain-language reading of a complexity label, shown with predictions.
pub fn complexity_explanation(complexity: &str) -> &'static str {
    match complexity {
        "O(n)" => "it takes linear time proportional to the input size",
        "O(n²)" => "it takes quadratic time, growing with the square of input size",
        "O(log n)" => "it takes logarithmic time, very efficient for large inputs",
        "O(n log n)" => "it takes linearithmic time, efficient for sorting",
        "O(V + E)" => "it visits every node and edge once",
        "O(mn)" => "it fills a table with one cell per pair of positions",
        "O(n!)" => "it grows factorially and is only feasible for small inputs",
        "O(2^n)" => "it doubles with every added element",
        _ => "the time grows with the input size",
    }
}

fn standard_entries() -> Vec<AlgorithmInfo> {
    vec![
        AlgorithmInfo {
            name: "Bubble Sort",
            category: Category::Sorting,
            description: "Simple sorting algorithm that repeatedly steps through the list",
            complexity: "O(n²)",
            listing: listings::BUBBLE_SORT,
            params: ParamKind::None,
            requires_sorted: false,
            runner: sorting::bubble_sort,
        },
        AlgorithmInfo {
            name: "Selection Sort",
            category: Category::Sorting,
            description: "Sorts an array by repeatedly finding the minimum element",
            complexity: "O(n²)",
            listing: listings::SELECTION_SORT,
            params: ParamKind::None,
            requires_sorted: false,
            runner: sorting::selection_sort,
        },
        AlgorithmInfo {
            name: "Insertion Sort",
            category: Category::Sorting,
            description: "Builds the final sorted array one item at a time",
            complexity: "O(n²)",
            listing: listings::INSERTION_SORT,
            params: ParamKind::None,
            requires_sorted: false,
            runner: sorting::insertion_sort,
        },
        AlgorithmInfo {
            name: "Merge Sort",
            category: Category::Sorting,
            description: "Divide and conquer algorithm that recursively sorts subarrays",
            complexity: "O(n log n)",
            listing: listings::MERGE_SORT,
            params: ParamKind::None,
            requires_sorted: false,
            runner: sorting::merge_sort,
        },
        AlgorithmInfo {
            name: "Linear Search",
            category: Category::Searching,
            description: "Simple search algorithm that checks each element sequentially",
            complexity: "O(n)",
            listing: listings::LINEAR_SEARCH,
            params: ParamKind::Target,
            requires_sorted: false,
            runner: searching::linear_search,
        },
        AlgorithmInfo {
            name: "Binary Search",
            category: Category::Searching,
            description: "Efficient search algorithm for sorted arrays",
            complexity: "O(log n)",
            listing: listings::BINARY_SEARCH,
            params: ParamKind::Target,
            requires_sorted: true,
            runner: searching::binary_search,
        },
        AlgorithmInfo {
            name: "Reverse Array",
            category: Category::TwoPointer,
            description: "Reverse an array using two pointer approach",
            complexity: "O(n)",
            listing: listings::REVERSE_ARRAY,
            params: ParamKind::None,
            requires_sorted: false,
            runner: two_pointer::reverse_array,
        },
        AlgorithmInfo {
            name: "Two Sum (Sorted Array)",
            category: Category::TwoPointer,
            description: "Find two numbers that add up to target in sorted array",
            complexity: "O(n)",
            listing: listings::TWO_SUM_SORTED,
            params: ParamKind::TargetSum,
            requires_sorted: true,
            runner: two_pointer::two_sum_sorted,
        },
        AlgorithmInfo {
            name: "Remove Duplicates",
            category: Category::TwoPointer,
            description: "Remove duplicates from sorted array using two pointers",
            complexity: "O(n)",
            listing: listings::REMOVE_DUPLICATES,
            params: ParamKind::None,
            requires_sorted: true,
            runner: two_pointer::remove_duplicates,
        },
        AlgorithmInfo {
            name: "Container With Most Water",
            category: Category::TwoPointer,
            description: "Find two lines that hold the greatest amount of water",
            complexity: "O(n)",
            listing: listings::MAX_AREA,
            params: ParamKind::None,
            requires_sorted: false,
            runner: two_pointer::max_area,
        },
        AlgorithmInfo {
            name: "Move Zeros to End",
            category: Category::ArrayProblems,
            description: "Move all zeros to the end while maintaining relative order",
            complexity: "O(n)",
            listing: listings::MOVE_ZEROS,
            params: ParamKind::None,
            requires_sorted: false,
            runner: rewrite::move_zeros,
        },
        AlgorithmInfo {
            name: "Find Missing Number",
            category: Category::ArrayProblems,
            description: "Find the missing number in array of 0 to n",
            complexity: "O(n)",
            listing: listings::FIND_MISSING_NUMBER,
            params: ParamKind::None,
            requires_sorted: false,
            runner: rewrite::find_missing_number,
        },
        AlgorithmInfo {
            name: "Find Peak Element",
            category: Category::ArrayProblems,
            description: "Find a peak element in array (greater than neighbors)",
            complexity: "O(log n)",
            listing: listings::FIND_PEAK_ELEMENT,
            params: ParamKind::None,
            requires_sorted: false,
            runner: searching::find_peak_element,
        },
        AlgorithmInfo {
            name: "Rotate Array",
            category: Category::ArrayProblems,
            description: "Rotate array by k positions to the right",
            complexity: "O(n)",
            listing: listings::ROTATE_ARRAY,
            params: ParamKind::RotateCount,
            requires_sorted: false,
            runner: rewrite::rotate_array,
        },
        AlgorithmInfo {
            name: "Maximum Subarray Sum (Kadane)",
            category: Category::ArrayProblems,
            description: "Find maximum sum of contiguous subarray",
            complexity: "O(n)",
            listing: listings::MAX_SUBARRAY_SUM,
            params: ParamKind::None,
            requires_sorted: false,
            runner: rewrite::max_subarray_sum,
        },
        AlgorithmInfo {
            name: "Two Sum (Hash Map)",
            category: Category::HashSet,
            description: "Find two numbers that add up to target using hash map",
            complexity: "O(n)",
            listing: listings::TWO_SUM_HASH,
            params: ParamKind::TargetSum,
            requires_sorted: false,
            runner: hashing::two_sum_hash,
        },
        AlgorithmInfo {
            name: "Find Duplicate",
            category: Category::HashSet,
            description: "Find duplicate number in array using hash set",
            complexity: "O(n)",
            listing: listings::FIND_DUPLICATE,
            params: ParamKind::None,
            requires_sorted: false,
            runner: hashing::find_duplicate,
        },
        AlgorithmInfo {
            name: "Frequency Counter",
            category: Category::HashSet,
            description: "Count frequency of elements using hash map",
            complexity: "O(n)",
            listing: listings::FREQUENCY_COUNTER,
            params: ParamKind::None,
            requires_sorted: false,
            runner: hashing::frequency_counter,
        },
        AlgorithmInfo {
            name: "Maximum Sum Subarray of Size K",
            category: Category::SlidingWindow,
            description: "Find maximum sum of subarray with fixed size k",
            complexity: "O(n)",
            listing: listings::MAX_SUM_SUBARRAY,
            params: ParamKind::WindowSize,
            requires_sorted: false,
            runner: sliding_window::max_sum_subarray,
        },
        AlgorithmInfo {
            name: "Minimum Size Subarray Sum",
            category: Category::SlidingWindow,
            description: "Find minimum length subarray with sum >= target",
            complexity: "O(n)",
            listing: listings::MIN_SIZE_SUBARRAY_SUM,
            params: ParamKind::TargetSum,
            requires_sorted: false,
            runner: sliding_window::min_size_subarray_sum,
        },
        AlgorithmInfo {
            name: "Longest Subarray with K Distinct",
            category: Category::SlidingWindow,
            description: "Find the longest subarray with at most k distinct values",
            complexity: "O(n)",
            listing: listings::LONGEST_K_DISTINCT,
            params: ParamKind::DistinctCount,
            requires_sorted: false,
            runner: sliding_window::longest_k_distinct,
        },
        AlgorithmInfo {
            name: "Generate All Permutations",
            category: Category::Backtracking,
            description: "Generate all possible permutations of array",
            complexity: "O(n!)",
            listing: listings::PERMUTATIONS,
            params: ParamKind::None,
            requires_sorted: false,
            runner: backtracking::permutations,
        },
        AlgorithmInfo {
            name: "Generate All Subsets",
            category: Category::Backtracking,
            description: "Generate all possible subsets of array",
            complexity: "O(2^n)",
            listing: listings::SUBSETS,
            params: ParamKind::None,
            requires_sorted: false,
            runner: backtracking::subsets,
        },
        AlgorithmInfo {
            name: "N-Queens Problem",
            category: Category::Backtracking,
            description: "Place n queens on an nxn board so no two threaten each other",
            complexity: "O(n!)",
            listing: listings::N_QUEENS,
            params: ParamKind::BoardSize,
            requires_sorted: false,
            runner: backtracking::n_queens,
        },
        AlgorithmInfo {
            name: "Tree Traversal - Inorder",
            category: Category::Traversal,
            description: "Visits left subtree, root, then right subtree",
            complexity: "O(n)",
            listing: listings::INORDER_TRAVERSAL,
            params: ParamKind::None,
            requires_sorted: false,
            runner: traversal::inorder_traversal,
        },
        AlgorithmInfo {
            name: "Tree Traversal - Preorder",
            category: Category::Traversal,
            description: "Visits root, left subtree, then right subtree",
            complexity: "O(n)",
            listing: listings::PREORDER_TRAVERSAL,
            params: ParamKind::None,
            requires_sorted: false,
            runner: traversal::preorder_traversal,
        },
        AlgorithmInfo {
            name: "Breadth First Search (BFS)",
            category: Category::Traversal,
            description: "Traverses the tree level by level",
            complexity: "O(V + E)",
            listing: listings::BFS_TRAVERSAL,
            params: ParamKind::None,
            requires_sorted: false,
            runner: traversal::bfs_traversal,
        },
        AlgorithmInfo {
            name: "Depth First Search (DFS)",
            category: Category::Traversal,
            description: "Traverses the tree by exploring as far as possible",
            complexity: "O(V + E)",
            listing: listings::DFS_TRAVERSAL,
            params: ParamKind::None,
            requires_sorted: false,
            runner: traversal::dfs_traversal,
        },
        AlgorithmInfo {
            name: "Fibonacci (DP)",
            category: Category::Dynamic,
            description: "Dynamic programming solution for Fibonacci sequence",
            complexity: "O(n)",
            listing: listings::FIBONACCI,
            params: ParamKind::FibIndex,
            requires_sorted: false,
            runner: dynamic::fibonacci,
        },
        AlgorithmInfo {
            name: "Longest Common Subsequence",
            category: Category::Dynamic,
            description: "Finds the longest common subsequence between two sequences",
            complexity: "O(mn)",
            listing: listings::LONGEST_COMMON_SUBSEQUENCE,
            params: ParamKind::SecondSequence,
            requires_sorted: false,
            runner: dynamic::longest_common_subsequence,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_entries() {
        let catalog = Catalog::standard();
        for category in Category::ALL {
            assert!(
                !catalog.in_category(category).is_empty(),
                "category {} is empty",
                category
            );
        }
    }

    #[test]
    fn lookup_by_name_and_category() {
        let catalog = Catalog::standard();
        let entry = catalog.get(Category::Sorting, "Bubble Sort").unwrap();
        assert_eq!(entry.complexity, "O(n²)");
        assert!(catalog.get(Category::Sorting, "Bogo Sort").is_none());
        assert!(catalog.get(Category::Searching, "Bubble Sort").is_none());
    }

    #[test]
    fn missing_entries_are_reported_not_fatal() {
        let catalog = Catalog::standard();
        let err = catalog.require(Category::Sorting, "Bogo Sort").unwrap_err();
        assert!(matches!(err, RunnerError::UnknownAlgorithm { .. }));
        assert!(err.to_string().contains("Bogo Sort"));
    }

    #[test]
    fn listings_are_nonempty() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            assert!(!entry.listing.is_empty(), "{} has no listing", entry.name);
            assert!(!entry.description.is_empty());
        }
    }
}
