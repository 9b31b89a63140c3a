// src/db/blob_store.rs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::error::AppError;

// Armazenamento chave-valor por nome de slot. Cada escrita substitui
// todo o conteúdo anterior do slot.
pub trait BlobStore: Send + Sync {
    fn read(&self, slot: &str) -> Result<Vec<u8>, AppError>;
    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), AppError>;
    fn exists(&self, slot: &str) -> bool;
}

// ---
// Um arquivo por slot dentro do diretório de dados
// ---
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| AppError::storage(&root.to_string_lossy(), e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, slot: &str) -> PathBuf {
        self.root.join(slot)
    }
}

impl BlobStore for FsBlobStore {
    fn read(&self, slot: &str) -> Result<Vec<u8>, AppError> {
        fs::read(self.path_for(slot)).map_err(|e| AppError::storage(slot, e))
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), AppError> {
        fs::write(self.path_for(slot), bytes).map_err(|e| AppError::storage(slot, e))
    }

    fn exists(&self, slot: &str) -> bool {
        self.path_for(slot).is_file()
    }
}

// ---
// Em memória (testes e execuções sem disco)
// ---
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total de escritas recebidas, somando todos os slots.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contents(&self, slot: &str) -> Option<Vec<u8>> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(slot)
            .cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, slot: &str) -> Result<Vec<u8>, AppError> {
        self.contents(slot).ok_or_else(|| {
            AppError::storage(
                slot,
                std::io::Error::new(std::io::ErrorKind::NotFound, "slot inexistente"),
            )
        })
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(slot.to_string(), bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self, slot: &str) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(slot)
    }
}
