//! Assembly of an article's flat comment list into a reply forest.

use crate::server::{
    model::comment::{Comment, CommentNode},
    util::forest::Forest,
};

/// Builds the reply forest for one article's comments.
///
/// Pure and total: every input comment appears exactly once in the output.
///
/// - Roots keep the input order (the fetch order, newest first).
/// - Every reply list, at every depth, is sorted oldest first by `created_at`; replies
///   created at the same instant keep their input order.
/// - A comment whose parent is not in the input is promoted to a root in its input
///   position.
/// - If parent links form a cycle, the cycle member that comes first in the input is
///   promoted to a root and the rest stay nested beneath it.
///
/// # Arguments
/// - `comments` - All comments of one article, in fetch order
///
/// # Returns
/// - `Vec<CommentNode>` - Root comments with their nested replies
pub fn build_comment_tree(comments: Vec<Comment>) -> Vec<CommentNode> {
    let links: Vec<(i32, Option<i32>)> = comments.iter().map(|c| (c.id, c.parent_id)).collect();

    let mut forest = Forest::link(&links);
    forest.sort_children_by_key(|position| comments[position].created_at);

    forest.assemble(comments, |comment, replies| CommentNode { comment, replies })
}
