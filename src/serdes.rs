use crate::ciphertext::Ciphertext;
use crate::engine::{Dual, Group, PairingEngine, ScalarField};
use crate::ibe_err::*;
use crate::param::{SystemParameters, VALID_CIPHERSUITE};
use crate::prng::PRNG;
use crate::user_key::UserKey;
use std::io::{Error, ErrorKind, Read, Result, Write};
use zeroize::Zeroize;

/// Serialization support for insulate structures.
///
/// Every blob starts with the ciphersuite id, followed by the canonical
/// encodings of the fields:
/// * system parameters: `| id | g | g1 | g2 | g3 | U | V |`,
///   where the dual values `g, U, V` are written key side first;
/// * ciphertexts: `| id | label len (u16) | label | c1 | c2 | c3 | theta |`;
/// * user keys: `| id | version (u64) | identity | sk1 | sk2 | sk3 | sk4 | prng |`.
pub trait IbeSerDes: Sized {
    /// Serialize a struct to a writer.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Deserialize a struct from a reader.
    /// Group elements are checked for subgroup membership on the way in.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self>;
}

fn invalid_data(e: IbeError) -> Error {
    Error::new(ErrorKind::InvalidData, e)
}

fn write_elem<G: Group, W: Write>(elem: &G, writer: &mut W) -> Result<()> {
    writer.write_all(&elem.to_bytes())
}

fn read_elem<G: Group, R: Read>(reader: &mut R) -> Result<G> {
    let mut buf = vec![0u8; G::BYTES];
    reader.read_exact(&mut buf)?;
    G::from_bytes(&buf).map_err(invalid_data)
}

fn read_scalar<S: ScalarField, R: Read>(reader: &mut R) -> Result<S> {
    let mut buf = vec![0u8; S::BYTES];
    reader.read_exact(&mut buf)?;
    S::from_bytes(&buf).map_err(invalid_data)
}

fn write_dual<E: PairingEngine, W: Write>(dual: &Dual<E>, writer: &mut W) -> Result<()> {
    write_elem(&dual.key, writer)?;
    write_elem(&dual.ct, writer)
}

fn read_dual<E: PairingEngine, R: Read>(reader: &mut R) -> Result<Dual<E>> {
    let key = read_elem(reader)?;
    let ct = read_elem(reader)?;
    Ok(Dual { key, ct })
}

/// Reads the ciphersuite byte and checks it against the engine.
fn read_ciphersuite<E: PairingEngine, R: Read>(reader: &mut R) -> Result<u8> {
    let mut csid = [0u8; 1];
    reader.read_exact(&mut csid)?;
    if !VALID_CIPHERSUITE.contains(&csid[0]) || csid[0] != E::CIPHERSUITE {
        tracing::debug!("unexpected ciphersuite id {} in a blob", csid[0]);
        return Err(Error::new(ErrorKind::InvalidData, ERR_CIPHERSUITE));
    }
    Ok(csid[0])
}

impl<E: PairingEngine> IbeSerDes for SystemParameters<E> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&[self.ciphersuite()])?;
        write_dual(self.g(), writer)?;
        write_elem(self.g1(), writer)?;
        write_elem(self.g2(), writer)?;
        write_elem(self.g3(), writer)?;
        write_dual(self.u(), writer)?;
        write_dual(self.v(), writer)
    }

    /// Besides the membership tests, this also checks that no generator is
    /// the identity and that each dual value is consistent across groups.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let csid = read_ciphersuite::<E, R>(reader)?;
        let g = read_dual(reader)?;
        let g1 = read_elem(reader)?;
        let g2 = read_elem(reader)?;
        let g3 = read_elem(reader)?;
        let u = read_dual(reader)?;
        let v = read_dual(reader)?;
        let pp = SystemParameters::from_public(csid, g, g1, g2, g3, u, v).map_err(invalid_data)?;
        if !pp.is_consistent() {
            return Err(Error::new(ErrorKind::InvalidData, ERR_DESERIAL));
        }
        Ok(pp)
    }
}

impl<E: PairingEngine> IbeSerDes for Ciphertext<E> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        let label = self.label();
        if label.len() > u16::max_value() as usize {
            return Err(Error::new(ErrorKind::InvalidInput, ERR_SERIAL));
        }
        writer.write_all(&[self.ciphersuite()])?;
        writer.write_all(&(label.len() as u16).to_be_bytes())?;
        writer.write_all(label)?;
        write_elem(self.c1(), writer)?;
        write_elem(self.c2(), writer)?;
        write_elem(self.c3(), writer)?;
        writer.write_all(&self.theta().to_bytes())
    }

    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let csid = read_ciphersuite::<E, R>(reader)?;
        let mut len = [0u8; 2];
        reader.read_exact(&mut len)?;
        let mut label = vec![0u8; u16::from_be_bytes(len) as usize];
        reader.read_exact(&mut label)?;
        let c1 = read_elem(reader)?;
        let c2 = read_elem(reader)?;
        let c3 = read_elem(reader)?;
        let theta = read_scalar(reader)?;
        Ok(Ciphertext::construct(csid, label, c1, c2, c3, theta))
    }
}

impl<E: PairingEngine> IbeSerDes for UserKey<E> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&[self.ciphersuite()])?;
        writer.write_all(&self.version().to_be_bytes())?;
        writer.write_all(&self.id().to_bytes())?;
        write_elem(self.sk1(), writer)?;
        write_elem(self.sk2(), writer)?;
        write_elem(self.sk3(), writer)?;
        write_elem(self.sk4(), writer)?;
        writer.write_all(self.prng().seed())
    }

    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let csid = read_ciphersuite::<E, R>(reader)?;
        let mut version = [0u8; 8];
        reader.read_exact(&mut version)?;
        let version = u64::from_be_bytes(version);
        if version == 0 {
            return Err(Error::new(ErrorKind::InvalidData, ERR_VERSION));
        }
        let id: E::Scalar = read_scalar(reader)?;
        if id.is_zero() {
            return Err(invalid_data(IbeError::DegenerateParameter("identity")));
        }
        let sk1 = read_elem(reader)?;
        let sk2 = read_elem(reader)?;
        let sk3 = read_elem(reader)?;
        let sk4 = read_elem(reader)?;
        let mut seed = [0u8; 64];
        reader.read_exact(&mut seed)?;
        let prng = PRNG::construct(seed);
        seed.zeroize();
        Ok(UserKey::construct(
            csid,
            id,
            version,
            [sk1, sk2, sk3, sk4],
            prng,
        ))
    }
}
