use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paperflow_editor::{Document, Operation, PageId, Rotation, WorkspaceState};

fn workspace(documents: u32, pages_per_document: u32) -> WorkspaceState {
    let mut state = WorkspaceState::new();
    for i in 0..documents {
        state.apply(Operation::AddDocument {
            document: Document::with_page_count(
                format!("doc-{}", i).into(),
                format!("{}.pdf", i),
                pages_per_document,
            ),
        });
    }
    state
}

fn reorder_large_workspace(c: &mut Criterion) {
    let state = workspace(10, 100);
    let reversed: Vec<PageId> = state.pages().iter().rev().map(|p| p.id.clone()).collect();

    c.bench_function("reorder_1000_pages", |b| {
        b.iter(|| {
            let mut state = state.clone();
            state.apply(Operation::ReorderPages {
                page_ids: black_box(reversed.clone()),
            });
            state
        })
    });
}

fn rotate_with_full_history(c: &mut Criterion) {
    let mut state = workspace(4, 50);
    for _ in 0..60 {
        state.apply(Operation::RotatePage {
            page_id: "doc-0-page-0".into(),
            rotation: Rotation::Deg90,
        });
    }

    c.bench_function("rotate_with_full_history", |b| {
        b.iter(|| {
            let mut state = state.clone();
            state.apply(Operation::RotatePage {
                page_id: black_box("doc-3-page-49".into()),
                rotation: Rotation::Deg180,
            });
            state
        })
    });
}

fn undo_redo_cycle(c: &mut Criterion) {
    let mut state = workspace(4, 50);
    for i in 0..50 {
        state.apply(Operation::DeletePages {
            page_ids: vec![format!("doc-1-page-{}", i).into()],
        });
    }

    c.bench_function("undo_redo_cycle", |b| {
        b.iter(|| {
            let mut state = state.clone();
            for _ in 0..10 {
                state.apply(Operation::Undo);
            }
            for _ in 0..10 {
                state.apply(Operation::Redo);
            }
            state
        })
    });
}

criterion_group!(
    benches,
    reorder_large_workspace,
    rotate_with_full_history,
    undo_redo_cycle
);
criterion_main!(benches);
