//! Format binaire compact des murs du labyrinthe.
//!
//! Format (big-endian / ordre réseau) :
//! - octets 0..4 : largeur, i32
//! - octets 4..8 : hauteur, i32
//! - octets 8..  : un mot de 2 bits par cellule, ligne par ligne ;
//!   bit 1 = passage Sud ouvert, bit 0 = passage Est ouvert (1 = ouvert,
//!   0 = mur). 4 mots par octet, bits de poids fort d'abord, dernier octet
//!   complété par des zéros.
//!
//! Les passages Nord et Ouest ne sont pas stockés : ils se déduisent par
//! symétrie du Sud de la cellule du dessus et de l'Est de celle de gauche.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, NetworkEndian};
use log::{debug, trace};

use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::error::{MazeError, Result};
use crate::maze::map::Maze;

/// Taille de l'en-tête (largeur + hauteur).
pub const HEADER_LEN: usize = 8;
/// Nombre de mots de 2 bits par octet.
pub const CODEWORDS_PER_BYTE: usize = 4;
pub const SOUTH_OPEN: u8 = 0b10;
pub const EAST_OPEN: u8 = 0b01;
const CODEWORD_MASK: u8 = 0b11;

/// Taille du corps pour un labyrinthe `width x height`.
pub fn body_len(width: usize, height: usize) -> usize {
    (width * height).div_ceil(CODEWORDS_PER_BYTE)
}

fn shift_of(index: usize) -> usize {
    6 - 2 * (index % CODEWORDS_PER_BYTE)
}

fn codeword(cell: &Cell) -> u8 {
    let mut word = 0;
    if cell.neighbor(Direction::South).is_some() {
        word |= SOUTH_OPEN;
    }
    if cell.neighbor(Direction::East).is_some() {
        word |= EAST_OPEN;
    }
    word
}

/// Encode le labyrinthe en mémoire (en-tête + corps).
pub fn to_bytes(maze: &Maze) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_LEN + body_len(maze.width(), maze.height())];
    // Maze::new garantit des dimensions <= i32::MAX
    NetworkEndian::write_i32(&mut bytes[0..4], maze.width() as i32);
    NetworkEndian::write_i32(&mut bytes[4..8], maze.height() as i32);

    let body = &mut bytes[HEADER_LEN..];
    for (index, cell) in maze.iter().enumerate() {
        body[index / CODEWORDS_PER_BYTE] |= codeword(cell) << shift_of(index);
    }
    bytes
}

/// Écrit le labyrinthe dans `writer`. Le labyrinthe n'est pas modifié.
pub fn encode<W: Write>(maze: &Maze, writer: &mut W) -> Result<()> {
    let bytes = to_bytes(maze);
    writer.write_all(&bytes)?;
    debug!(
        "encoded {}x{} maze into {} bytes",
        maze.width(),
        maze.height(),
        bytes.len()
    );
    Ok(())
}

/// Décode un flux dans un labyrinthe déjà dimensionné.
///
/// - en-tête incomplet : `CorruptedData`, labyrinthe intact ;
/// - dimensions différentes : `DimensionMismatch`, labyrinthe intact ;
/// - corps incomplet ou octets en trop : `CorruptedData`, le labyrinthe est
///   remis dans l'état « aucun passage » (`Maze::clear`).
pub fn decode_into<R: Read>(reader: &mut R, maze: &mut Maze) -> Result<()> {
    let found = read_header(reader)?;
    let expected = (maze.width() as i32, maze.height() as i32);
    if found != expected {
        return Err(MazeError::DimensionMismatch { expected, found });
    }

    maze.clear_walls();
    let result = read_body(reader, maze.len() as u64)
        .and_then(|body| apply_walls(maze, &body))
        .and_then(|()| expect_end(reader));
    if let Err(err) = result {
        maze.clear();
        return Err(err);
    }
    Ok(())
}

/// Décode un flux complet : les dimensions sont lues dans l'en-tête.
///
/// Le corps est lu et vérifié avant toute allocation du labyrinthe : un
/// en-tête annonçant des dimensions énormes sans le corps correspondant est
/// simplement `CorruptedData`.
pub fn decode<R: Read>(reader: &mut R) -> Result<Maze> {
    let (width, height) = read_header(reader)?;
    if width <= 0 || height <= 0 {
        return Err(MazeError::CorruptedData(format!(
            "non-positive dimensions in header: {width}x{height}"
        )));
    }
    let body = read_body(reader, width as u64 * height as u64)?;
    expect_end(reader)?;

    let mut maze = Maze::new(width as usize, height as usize)
        .map_err(|err| MazeError::CorruptedData(err.to_string()))?;
    maze.clear_walls();
    apply_walls(&mut maze, &body)?;
    Ok(maze)
}

pub fn from_bytes(bytes: &[u8]) -> Result<Maze> {
    decode(&mut &bytes[..])
}

/// Sauvegarde le labyrinthe dans un fichier (créé ou écrasé).
pub fn save<P: AsRef<Path>>(maze: &Maze, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode(maze, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Charge un labyrinthe depuis un fichier.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let mut reader = BufReader::new(File::open(path)?);
    decode(&mut reader)
}

/// Charge un fichier dans un labyrinthe existant, de mêmes dimensions.
pub fn load_into<P: AsRef<Path>>(path: P, maze: &mut Maze) -> Result<()> {
    let mut reader = BufReader::new(File::open(path)?);
    decode_into(&mut reader, maze)
}

fn read_exact_or_corrupted<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    let expected = buf.len();
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => {
            MazeError::CorruptedData(format!("truncated {what}: expected {expected} bytes"))
        }
        _ => MazeError::Io(err),
    })
}

fn read_header<R: Read>(reader: &mut R) -> Result<(i32, i32)> {
    let mut header = [0u8; HEADER_LEN];
    read_exact_or_corrupted(reader, &mut header, "header")?;
    let width = NetworkEndian::read_i32(&header[0..4]);
    let height = NetworkEndian::read_i32(&header[4..8]);
    Ok((width, height))
}

/// Lit exactement le corps de `cells` cellules, sans rien lire au-delà.
fn read_body<R: Read>(reader: &mut R, cells: u64) -> Result<Vec<u8>> {
    let expected = cells.div_ceil(CODEWORDS_PER_BYTE as u64);
    let mut body = Vec::new();
    (&mut *reader).take(expected).read_to_end(&mut body)?;
    if (body.len() as u64) < expected {
        return Err(MazeError::CorruptedData(format!(
            "truncated body: expected {expected} bytes, found {}",
            body.len()
        )));
    }
    Ok(body)
}

/// Pose les murs du corps sur un labyrinthe sans murs.
fn apply_walls(maze: &mut Maze, body: &[u8]) -> Result<()> {
    let (width, height) = (maze.width(), maze.height());
    let mut walls = 0usize;
    for index in 0..maze.len() {
        let word = (body[index / CODEWORDS_PER_BYTE] >> shift_of(index)) & CODEWORD_MASK;
        let (row, column) = (index / width, index % width);
        let here = (row as i32, column as i32);

        if word & SOUTH_OPEN == 0 && row + 1 < height {
            trace!("wall south of {here:?}");
            maze.add_wall(here, Direction::South.step(here.0, here.1))?;
            walls += 1;
        }
        if word & EAST_OPEN == 0 && column + 1 < width {
            trace!("wall east of {here:?}");
            maze.add_wall(here, Direction::East.step(here.0, here.1))?;
            walls += 1;
        }
    }
    debug!("decoded {width}x{height} maze with {walls} inner walls");
    Ok(())
}

/// Le flux doit être épuisé après le corps.
fn expect_end<R: Read>(reader: &mut R) -> Result<()> {
    let trailing = io::copy(reader, &mut io::sink())?;
    if trailing > 0 {
        return Err(MazeError::CorruptedData(format!(
            "{trailing} unexpected trailing byte(s) after maze body"
        )));
    }
    Ok(())
}
